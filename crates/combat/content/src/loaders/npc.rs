//! NPC template loader.

use std::path::Path;

use combat_core::NpcTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// NPC catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcCatalog {
    pub npcs: Vec<NpcTemplate>,
}

/// Loader for NPC templates from RON files.
pub struct NpcLoader;

impl NpcLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<NpcTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<NpcTemplate>> {
        let catalog: NpcCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse npc catalog RON: {}", e))?;

        if let Some(npc) = catalog.npcs.iter().find(|npc| npc.max_hp == 0) {
            anyhow::bail!("npc '{}' must have max_hp above 0", npc.id);
        }
        Ok(catalog.npcs)
    }
}
