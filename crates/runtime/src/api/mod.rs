//! Public API surface of the runtime crate.
mod errors;
mod service;

pub use errors::{Result, RuntimeError};
pub use service::CombatService;
