//! Injected collaborators.
//!
//! Oracles expose template data, randomness and time. The [`Env`] aggregate
//! bundles them so the engine can reach everything it needs without coupling
//! to concrete implementations.
mod clock;
mod error;
mod rng;
mod templates;

pub use clock::{ClockOracle, FixedClock};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed, shuffle};
pub use templates::{NpcTemplate, TemplateOracle};

/// Aggregates the oracles required by battle setup and the engine.
pub struct Env<'a, T, R, C>
where
    T: TemplateOracle + ?Sized,
    R: RngOracle + ?Sized,
    C: ClockOracle + ?Sized,
{
    templates: Option<&'a T>,
    rng: Option<&'a R>,
    clock: Option<&'a C>,
}

// Derived impls would require the oracle types themselves to be `Copy`.
impl<T, R, C> Clone for Env<'_, T, R, C>
where
    T: TemplateOracle + ?Sized,
    R: RngOracle + ?Sized,
    C: ClockOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R, C> Copy for Env<'_, T, R, C>
where
    T: TemplateOracle + ?Sized,
    R: RngOracle + ?Sized,
    C: ClockOracle + ?Sized,
{
}

pub type CombatEnv<'a> =
    Env<'a, dyn TemplateOracle + 'a, dyn RngOracle + 'a, dyn ClockOracle + 'a>;

impl<'a, T, R, C> Env<'a, T, R, C>
where
    T: TemplateOracle + ?Sized,
    R: RngOracle + ?Sized,
    C: ClockOracle + ?Sized,
{
    pub fn new(templates: Option<&'a T>, rng: Option<&'a R>, clock: Option<&'a C>) -> Self {
        Self {
            templates,
            rng,
            clock,
        }
    }

    pub fn with_all(templates: &'a T, rng: &'a R, clock: &'a C) -> Self {
        Self::new(Some(templates), Some(rng), Some(clock))
    }

    pub fn empty() -> Self {
        Self {
            templates: None,
            rng: None,
            clock: None,
        }
    }

    /// Returns the TemplateOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TemplatesNotAvailable` if no template oracle was provided.
    pub fn templates(&self) -> Result<&'a T, OracleError> {
        self.templates.ok_or(OracleError::TemplatesNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the ClockOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClockNotAvailable` if no clock oracle was provided.
    pub fn clock(&self) -> Result<&'a C, OracleError> {
        self.clock.ok_or(OracleError::ClockNotAvailable)
    }
}

impl<'a, T, R, C> Env<'a, T, R, C>
where
    T: TemplateOracle + 'a,
    R: RngOracle + 'a,
    C: ClockOracle + 'a,
{
    /// Converts this environment into a trait-object based `CombatEnv`.
    pub fn into_combat_env(self) -> CombatEnv<'a> {
        let templates: Option<&'a dyn TemplateOracle> = self.templates.map(|t| t as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|r| r as _);
        let clock: Option<&'a dyn ClockOracle> = self.clock.map(|c| c as _);
        Env::new(templates, rng, clock)
    }
}
