//! Runtime orchestration for combat sessions.
//!
//! This crate is the store boundary around `combat-core`. It keeps battles in
//! a [`BattleRepository`], wires content and system services into the oracle
//! bundle the engine expects, and serialises requests per battle through
//! [`CombatService`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the service and error types downstream clients use
//! - [`oracle`] adapts content catalogs, randomness and wall-clock time
//! - [`repository`] persists battle aggregates between requests
pub mod api;
pub mod oracle;
pub mod repository;

pub use api::{CombatService, Result, RuntimeError};
pub use oracle::{OracleManager, SystemClock, random_seed};
pub use repository::{BattleRepository, FileBattleRepo, InMemoryBattleRepo, RepositoryError};
