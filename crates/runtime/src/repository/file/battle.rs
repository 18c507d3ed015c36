//! File-based BattleRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use combat_core::{Battle, BattleId};

use crate::repository::{BattleRepository, RepositoryError, Result};

/// File-based implementation of BattleRepository.
///
/// Each battle is stored as `battle_{id}.json`. Writes go to a temp file
/// first and are renamed into place.
pub struct FileBattleRepo {
    base_dir: PathBuf,
}

impl FileBattleRepo {
    /// Create a new file-based battle repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn battle_path(&self, id: BattleId) -> PathBuf {
        self.base_dir.join(format!("battle_{}.json", id.0))
    }
}

impl BattleRepository for FileBattleRepo {
    fn save(&self, battle: &Battle) -> Result<()> {
        let path = self.battle_path(battle.id);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec(battle)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", battle.id, path.display());
        Ok(())
    }

    fn load(&self, id: BattleId) -> Result<Option<Battle>> {
        let path = self.battle_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let battle: Battle = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded {} from {}", id, path.display());
        Ok(Some(battle))
    }

    fn exists(&self, id: BattleId) -> bool {
        self.battle_path(id).exists()
    }

    fn delete(&self, id: BattleId) -> Result<()> {
        let path = self.battle_path(id);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted {}", id);
        }
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<BattleId>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename
                    .strip_prefix("battle_")
                    .and_then(|s| s.strip_suffix(".json"))
                && let Ok(id) = id_str.parse::<u64>()
            {
                ids.push(BattleId(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}
