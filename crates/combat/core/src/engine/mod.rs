//! Turn resolution.
//!
//! [`CombatEngine`] is the authoritative reducer for a [`Battle`]. Each
//! request runs against a scratch copy of the battle; the copy replaces the
//! original only when the request resolves, so a reported error never leaves
//! a half-applied turn behind.
mod errors;
mod play;
mod setup;
mod turns;

pub use errors::{ResolveError, SetupError};
pub use play::{PlayCard, PlayOutcome};
pub use setup::{BattleSetup, EnemySpawn, LoadoutEntry, ParticipantSetup, start_battle};
pub use turns::EndTurnOutcome;

use tracing::info;

use crate::config::CombatConfig;
use crate::env::{ClockOracle, CombatEnv};
use crate::state::{Battle, BattleEvent, BattleOutcome, EntityId, LogEntry};

/// Seed contexts for the shuffles a battle performs.
pub(crate) const SHUFFLE_OPENING: u32 = 0;
pub(crate) const SHUFFLE_RECYCLE: u32 = 1;

/// Resolves play-card and end-turn requests against one battle.
pub struct CombatEngine<'a> {
    battle: &'a mut Battle,
    config: &'a CombatConfig,
}

impl<'a> CombatEngine<'a> {
    pub fn new(battle: &'a mut Battle, config: &'a CombatConfig) -> Self {
        Self { battle, config }
    }

    pub fn battle(&self) -> &Battle {
        self.battle
    }

    /// Plays a card from the acting participant's hand.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] and leaves the battle untouched if the
    /// request is not legal.
    pub fn play_card(
        &mut self,
        env: CombatEnv<'_>,
        request: &PlayCard,
    ) -> Result<PlayOutcome, ResolveError> {
        self.resolve(|battle, config| play::resolve(battle, config, env, request))
    }

    /// Ends `actor`'s turn and runs every NPC turn up to the next living
    /// participant.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] and leaves the battle untouched if `actor`
    /// may not end the turn, or if an NPC's behavior tree cannot be found.
    pub fn end_turn(
        &mut self,
        env: CombatEnv<'_>,
        actor: EntityId,
    ) -> Result<EndTurnOutcome, ResolveError> {
        self.resolve(|battle, config| turns::resolve(battle, config, env, actor))
    }

    fn resolve<T>(
        &mut self,
        step: impl FnOnce(&mut Battle, &CombatConfig) -> Result<T, ResolveError>,
    ) -> Result<T, ResolveError> {
        if !self.battle.is_active() {
            return Err(ResolveError::BattleNotActive);
        }
        let mut scratch = self.battle.clone();
        scratch.nonce += 1;
        let outcome = step(&mut scratch, self.config)?;
        *self.battle = scratch;
        Ok(outcome)
    }
}

/// Appends a timestamped entry to the battle log.
pub(crate) fn record(
    battle: &mut Battle,
    clock: &(impl ClockOracle + ?Sized),
    actor: Option<EntityId>,
    event: BattleEvent,
) {
    let entry = LogEntry {
        round: battle.round,
        at_millis: clock.now_millis(),
        actor,
        event,
    };
    battle.log.push(entry);
}

/// Ends the battle if either side has been wiped out.
pub(crate) fn check_victory(battle: &mut Battle, clock: &(impl ClockOracle + ?Sized)) {
    let outcome = if battle.all_hostiles_down() {
        BattleOutcome::PlayersWin
    } else if battle.all_participants_down() {
        BattleOutcome::EnemiesWin
    } else {
        return;
    };
    if battle.finish(outcome) {
        info!(battle = %battle.id, round = battle.round, %outcome, "battle finished");
        record(battle, clock, None, BattleEvent::BattleEnded { outcome });
    }
}
