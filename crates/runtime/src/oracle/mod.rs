//! Runtime wrappers around the oracles the combat engine consumes.
//!
//! Template data comes from a [`TemplateCatalog`] loaded by `combat-content`;
//! randomness and time are system services. [`OracleManager`] bundles them so
//! the service can build a [`CombatEnv`] for every request. None of this data
//! lives in battle state.
mod clock;

use std::sync::Arc;

use combat_content::TemplateCatalog;
use combat_core::{ClockOracle, CombatEnv, Env, PcgRng, RngOracle, TemplateOracle};

pub use clock::SystemClock;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) templates: Arc<TemplateCatalog>,
    pub(crate) rng: PcgRng,
    pub(crate) clock: Arc<dyn ClockOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager over `templates` and an explicit clock.
    pub fn new(templates: Arc<TemplateCatalog>, clock: Arc<dyn ClockOracle>) -> Self {
        Self {
            templates,
            rng: PcgRng, // PcgRng is stateless
            clock,
        }
    }

    /// Creates an oracle manager stamping log entries with the system time.
    pub fn with_system_clock(templates: Arc<TemplateCatalog>) -> Self {
        Self::new(templates, Arc::new(SystemClock))
    }

    /// Borrows the managed oracles as a `CombatEnv`.
    pub fn as_combat_env(&self) -> CombatEnv<'_> {
        let templates: &dyn TemplateOracle = self.templates.as_ref();
        let rng: &dyn RngOracle = &self.rng;
        let clock: &dyn ClockOracle = self.clock.as_ref();
        Env::with_all(templates, rng, clock)
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }
}

/// Draws a fresh battle seed from the thread-local RNG.
///
/// Only used when a caller does not supply a seed; everything inside a battle
/// derives from the stored seed.
pub fn random_seed() -> u64 {
    rand::random()
}
