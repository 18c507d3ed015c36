//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their [`CombatConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combat config TOML: {}", e))?;

        if !(0.0..=1.0).contains(&config.off_rank_multiplier) {
            anyhow::bail!(
                "off_rank_multiplier must be within 0.0..=1.0, got {}",
                config.off_rank_multiplier
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("wall_slam_damage = 8\n").unwrap();
        assert_eq!(config.wall_slam_damage, 8);
        assert_eq!(config.hand_size, CombatConfig::DEFAULT_HAND_SIZE);
    }

    #[test]
    fn multiplier_out_of_range_is_rejected() {
        assert!(ConfigLoader::parse("off_rank_multiplier = 1.5\n").is_err());
    }
}
