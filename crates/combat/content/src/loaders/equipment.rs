//! Equipment and modifier catalog loaders.

use std::path::Path;

use combat_core::{EquipmentDefinition, Modifier};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub equipment: Vec<EquipmentDefinition>,
}

/// Modifier catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierCatalog {
    pub modifiers: Vec<Modifier>,
}

/// Loader for equipment catalogs from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load equipment definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<EquipmentDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EquipmentDefinition>> {
        let catalog: EquipmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        for def in &catalog.equipment {
            if def.condition > EquipmentDefinition::PRISTINE {
                anyhow::bail!(
                    "equipment '{}' has condition {} (max {})",
                    def.id,
                    def.condition,
                    EquipmentDefinition::PRISTINE
                );
            }
        }
        Ok(catalog.equipment)
    }
}

/// Loader for modifier catalogs from RON files.
pub struct ModifierLoader;

impl ModifierLoader {
    /// Load modifiers from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Modifier>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Modifier>> {
        let catalog: ModifierCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse modifier catalog RON: {}", e))?;
        Ok(catalog.modifiers)
    }
}
