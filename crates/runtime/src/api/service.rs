//! Request serialisation around the combat engine.

use std::collections::HashMap;
use std::sync::Arc;

use combat_core::{
    BattleId, BattleSetup, BattleView, CombatConfig, CombatEngine, CombatEnv, EndTurnOutcome,
    EntityId, PlayCard, PlayOutcome, ResolveError, start_battle,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::repository::BattleRepository;

/// Entry point for clients driving battles.
///
/// Every call on a battle takes that battle's async mutex, loads it from the
/// repository, resolves one request and saves it back on success. Requests
/// against different battles never wait on each other.
pub struct CombatService<R> {
    repo: Arc<R>,
    oracles: OracleManager,
    config: Arc<CombatConfig>,
    locks: Mutex<HashMap<BattleId, Arc<Mutex<()>>>>,
}

impl<R: BattleRepository> CombatService<R> {
    pub fn new(repo: Arc<R>, oracles: OracleManager, config: CombatConfig) -> Self {
        Self {
            repo,
            oracles,
            config: Arc::new(config),
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Builds a battle from `setup` and stores it.
    ///
    /// # Errors
    ///
    /// Fails with [`RuntimeError::Setup`] for an invalid setup and with
    /// [`RuntimeError::Repository`] if the id is already taken.
    pub async fn start(&self, setup: &BattleSetup) -> Result<BattleView> {
        self.serialised(setup.id, || {
            let battle = start_battle(setup, self.oracles.as_combat_env(), &self.config)?;
            self.repo.create(&battle)?;

            info!(battle = %battle.id, "battle stored");
            Ok(BattleView::from_battle(&battle, self.config.log_tail))
        })
        .await
    }

    /// Plays a card in battle `id`.
    pub async fn play_card(&self, id: BattleId, request: PlayCard) -> Result<PlayOutcome> {
        self.with_engine(id, move |engine, env| engine.play_card(env, &request))
            .await
    }

    /// Ends `actor`'s turn in battle `id`, running NPC turns up to the next
    /// participant.
    pub async fn end_turn(&self, id: BattleId, actor: EntityId) -> Result<EndTurnOutcome> {
        self.with_engine(id, move |engine, env| engine.end_turn(env, actor))
            .await
    }

    /// Returns the read-only projection of battle `id`.
    pub async fn view(&self, id: BattleId) -> Result<BattleView> {
        self.serialised(id, || {
            let battle = self.repo.load(id)?.ok_or(RuntimeError::BattleNotFound(id))?;
            Ok(BattleView::from_battle(&battle, self.config.log_tail))
        })
        .await
    }

    async fn with_engine<T>(
        &self,
        id: BattleId,
        step: impl FnOnce(&mut CombatEngine<'_>, CombatEnv<'_>) -> std::result::Result<T, ResolveError>
        + Send,
    ) -> Result<T> {
        self.serialised(id, move || {
            let mut battle = self.repo.load(id)?.ok_or(RuntimeError::BattleNotFound(id))?;
            let outcome = {
                let mut engine = CombatEngine::new(&mut battle, &self.config);
                step(&mut engine, self.oracles.as_combat_env())?
            };
            self.repo.save(&battle)?;

            debug!(battle = %id, nonce = battle.nonce, "request committed");
            Ok(outcome)
        })
        .await
    }

    /// Runs `work` while holding battle `id`'s lock.
    async fn serialised<T>(
        &self,
        id: BattleId,
        work: impl FnOnce() -> Result<T> + Send,
    ) -> Result<T> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(id).or_default())
        };
        let result = {
            let _guard = lock.lock().await;
            work()
        };

        let mut locks = self.locks.lock().await;
        // Only the map and this call hold the lock: nobody is queued on it.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(&id);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use combat_content::ContentFactory;
    use combat_core::{CardId, FixedClock};

    use super::*;
    use crate::repository::InMemoryBattleRepo;

    fn service() -> CombatService<InMemoryBattleRepo> {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../combat/content/data");
        let content = ContentFactory::load(data).unwrap();
        let oracles = OracleManager::new(Arc::new(content.catalog), Arc::new(FixedClock(0)));
        CombatService::new(Arc::new(InMemoryBattleRepo::new()), oracles, content.config)
    }

    #[tokio::test]
    async fn idle_battles_hold_no_lock() {
        let service = service();

        let err = service.view(BattleId(3)).await.unwrap_err();
        assert!(matches!(err, RuntimeError::BattleNotFound(BattleId(3))));
        let request = PlayCard {
            participant: EntityId(1),
            card: CardId::new("combat_knife"),
            target: None,
        };
        assert!(service.play_card(BattleId(3), request).await.is_err());
        assert!(service.end_turn(BattleId(4), EntityId(1)).await.is_err());

        assert!(service.locks.lock().await.is_empty());
    }
}
