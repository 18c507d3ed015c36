//! Content factory for building the template catalog from data files.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, ScalingRules};
use tracing::{debug, info};

use crate::catalog::TemplateCatalog;
use crate::loaders::{
    BehaviorLoader, ConfigLoader, EquipmentLoader, LoadResult, ModifierLoader, NamedTree,
    NpcLoader, ScalingLoader,
};

/// Everything loaded from one data directory.
#[derive(Clone, Debug)]
pub struct Content {
    pub catalog: TemplateCatalog,
    pub config: CombatConfig,
}

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml     (optional, defaults otherwise)
/// ├── scaling.ron     (optional, defaults otherwise)
/// ├── equipment.ron
/// ├── modifiers.ron
/// ├── npcs.ron
/// └── behaviors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads and cross-checks every file in `data_dir`.
    pub fn load(data_dir: impl Into<PathBuf>) -> LoadResult<Content> {
        Self::new(data_dir).load_all()
    }

    pub fn load_all(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let mut catalog = TemplateCatalog::new(self.load_scaling()?);

        let equipment = self.load_equipment()?;
        let modifiers = self.load_modifiers()?;
        let npcs = self.load_npcs()?;
        let trees = self.load_behaviors()?;
        let counts = (equipment.len(), modifiers.len(), npcs.len(), trees.len());

        for def in equipment {
            catalog.add_equipment(def)?;
        }
        for modifier in modifiers {
            catalog.add_modifier(modifier)?;
        }
        for npc in npcs {
            catalog.add_npc(npc)?;
        }
        for NamedTree { id, root } in trees {
            catalog.add_behavior(id, root)?;
        }
        catalog.validate()?;

        info!(
            dir = %self.data_dir.display(),
            equipment = counts.0,
            modifiers = counts.1,
            npcs = counts.2,
            behaviors = counts.3,
            "combat content loaded"
        );
        Ok(Content { catalog, config })
    }

    /// Load combat tuning from `combat.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("combat.toml");
        if !path.exists() {
            debug!(path = %path.display(), "no combat config, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load scaling rules from `scaling.ron`, or defaults if absent.
    pub fn load_scaling(&self) -> LoadResult<ScalingRules> {
        let path = self.data_dir.join("scaling.ron");
        if !path.exists() {
            debug!(path = %path.display(), "no scaling rules, using defaults");
            return Ok(ScalingRules::default());
        }
        ScalingLoader::load(&path)
    }

    /// Load equipment from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<Vec<combat_core::EquipmentDefinition>> {
        EquipmentLoader::load(&self.data_dir.join("equipment.ron"))
    }

    /// Load modifiers from `modifiers.ron`.
    pub fn load_modifiers(&self) -> LoadResult<Vec<combat_core::Modifier>> {
        ModifierLoader::load(&self.data_dir.join("modifiers.ron"))
    }

    /// Load NPC templates from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<Vec<combat_core::NpcTemplate>> {
        NpcLoader::load(&self.data_dir.join("npcs.ron"))
    }

    /// Load behavior trees from `behaviors.ron`.
    pub fn load_behaviors(&self) -> LoadResult<Vec<NamedTree>> {
        BehaviorLoader::load(&self.data_dir.join("behaviors.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
