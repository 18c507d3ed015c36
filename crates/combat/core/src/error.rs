//! Common error infrastructure for combat-core.
//!
//! Domain errors (`OracleError`, `ResolveError`, `SetupError`) live next to
//! the code that raises them and all implement [`CombatError`], which sorts
//! them into the three reporting classes callers care about.
//!
//! Nothing here is fatal: every failure either leaves the battle untouched and
//! is reported, or is absorbed by the engine (e.g. an unknown actor in the turn
//! order simply passes its turn).

/// Classification of a reported error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The request is not legal right now: not the caller's turn, card not in
    /// hand, not enough energy, battle already finished.
    Validation,

    /// A referenced battle, participant or template does not exist.
    NotFound,

    /// State that should be impossible. The engine resolves these defensively
    /// where it can, so they only surface from misconfigured environments.
    Internal,
}

impl ErrorKind {
    /// Returns a human-readable description of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
        }
    }
}

/// Common trait for all combat-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify by what the caller should do, not by where the error came from
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the reporting class of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a stable identifier for this error variant.
    ///
    /// Useful for wire protocols and for asserting on errors in tests.
    fn error_code(&self) -> &'static str;
}
