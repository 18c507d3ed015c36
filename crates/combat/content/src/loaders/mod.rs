//! Content loaders for reading combat data from files.
//!
//! Each loader turns one RON/TOML file into core types; [`ContentFactory`]
//! loads a whole data directory into a [`Content`] bundle.

pub mod behavior;
pub mod config;
pub mod equipment;
pub mod factory;
pub mod npc;
pub mod scaling;

pub use behavior::{BehaviorLoader, NamedTree};
pub use config::ConfigLoader;
pub use equipment::{EquipmentLoader, ModifierLoader};
pub use factory::{Content, ContentFactory};
pub use npc::NpcLoader;
pub use scaling::ScalingLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
