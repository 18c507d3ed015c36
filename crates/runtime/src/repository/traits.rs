//! Repository contract for saving and loading battles.

use combat_core::{Battle, BattleId};

use super::{RepositoryError, Result};

/// Repository for battle persistence.
///
/// This is for DYNAMIC data that changes during play. Templates and tuning
/// live in the oracles, never here.
pub trait BattleRepository: Send + Sync {
    /// Save a battle, replacing any stored copy with the same id.
    fn save(&self, battle: &Battle) -> Result<()>;

    /// Load a battle by id.
    fn load(&self, id: BattleId) -> Result<Option<Battle>>;

    /// Check if a battle exists.
    fn exists(&self, id: BattleId) -> bool;

    /// Delete a battle.
    fn delete(&self, id: BattleId) -> Result<()>;

    /// List all stored battle ids in ascending order.
    fn list_ids(&self) -> Result<Vec<BattleId>> {
        Ok(vec![])
    }

    /// Save a battle that must not exist yet.
    fn create(&self, battle: &Battle) -> Result<()> {
        if self.exists(battle.id) {
            return Err(RepositoryError::AlreadyExists(battle.id));
        }
        self.save(battle)
    }
}
