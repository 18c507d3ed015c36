//! Environment-driven settings for the skirmish binary.

use std::env;
use std::path::PathBuf;

/// Skirmish settings, read from `SKIRMISH_*` environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkirmishConfig {
    /// Directory holding the RON/TOML content files.
    pub content_dir: PathBuf,
    /// Battle seed. A random seed is drawn when unset.
    pub seed: Option<u64>,
    /// Stop auto-play after this many rounds even if nobody has won.
    pub max_rounds: u32,
}

impl SkirmishConfig {
    pub const DEFAULT_CONTENT_DIR: &'static str = "crates/combat/content/data";
    pub const DEFAULT_MAX_ROUNDS: u32 = 20;

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SKIRMISH_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_env::<u64>("SKIRMISH_SEED") {
            config.seed = Some(seed);
        }
        if let Some(rounds) = read_env::<u32>("SKIRMISH_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        config
    }
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(Self::DEFAULT_CONTENT_DIR),
            seed: None,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
