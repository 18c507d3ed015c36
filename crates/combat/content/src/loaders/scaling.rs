//! Skill scaling rule loader.

use std::path::Path;

use combat_core::ScalingRules;

use crate::loaders::{LoadResult, read_file};

pub struct ScalingLoader;

impl ScalingLoader {
    pub fn load(path: &Path) -> LoadResult<ScalingRules> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ScalingRules> {
        let rules: ScalingRules = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scaling rules RON: {}", e))?;

        let mut seen = Vec::with_capacity(rules.rules.len());
        for rule in &rules.rules {
            if seen.contains(&rule.category) {
                anyhow::bail!("more than one scaling rule for category {}", rule.category);
            }
            seen.push(rule.category);
        }
        Ok(rules)
    }
}
