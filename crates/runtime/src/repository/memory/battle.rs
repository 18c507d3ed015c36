//! In-memory BattleRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use combat_core::{Battle, BattleId};

use crate::repository::{BattleRepository, RepositoryError, Result};

/// In-memory implementation of BattleRepository.
pub struct InMemoryBattleRepo {
    battles: RwLock<HashMap<BattleId, Battle>>,
}

impl InMemoryBattleRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            battles: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBattleRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRepository for InMemoryBattleRepo {
    fn save(&self, battle: &Battle) -> Result<()> {
        let mut battles = self
            .battles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        battles.insert(battle.id, battle.clone());
        Ok(())
    }

    fn load(&self, id: BattleId) -> Result<Option<Battle>> {
        let battles = self
            .battles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(battles.get(&id).cloned())
    }

    fn exists(&self, id: BattleId) -> bool {
        self.battles
            .read()
            .map(|battles| battles.contains_key(&id))
            .unwrap_or(false)
    }

    fn delete(&self, id: BattleId) -> Result<()> {
        let mut battles = self
            .battles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        battles.remove(&id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<BattleId>> {
        let battles = self
            .battles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<BattleId> = battles.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    // Check and insert under one write lock.
    fn create(&self, battle: &Battle) -> Result<()> {
        let mut battles = self
            .battles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if battles.contains_key(&battle.id) {
            return Err(RepositoryError::AlreadyExists(battle.id));
        }
        battles.insert(battle.id, battle.clone());
        Ok(())
    }
}
