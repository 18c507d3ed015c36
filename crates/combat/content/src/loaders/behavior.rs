//! Behavior tree loader.
//!
//! Trees are written directly in the node vocabulary of
//! [`combat_core::BehaviorNode`]. Node, condition and action names are a
//! closed set, so a misspelled name fails here rather than silently failing
//! at evaluation time.

use std::path::Path;

use combat_core::BehaviorNode;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A behavior tree with the id NPC templates refer to it by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedTree {
    pub id: String,
    pub root: BehaviorNode,
}

/// Behavior catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorCatalog {
    pub trees: Vec<NamedTree>,
}

/// Loader for behavior trees from RON files.
pub struct BehaviorLoader;

impl BehaviorLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<NamedTree>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<NamedTree>> {
        let catalog: BehaviorCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse behavior tree RON: {}", e))?;
        Ok(catalog.trees)
    }
}
