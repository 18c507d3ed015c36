//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, battle setup and turn resolution so
//! clients can bubble them up with one type and still classify them.
use combat_core::{BattleId, CombatError, ErrorKind, ResolveError, SetupError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0} not found")]
    BattleNotFound(BattleId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl CombatError for RuntimeError {
    fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::BattleNotFound(_) => ErrorKind::NotFound,
            RuntimeError::Repository(RepositoryError::AlreadyExists(_)) => ErrorKind::Validation,
            RuntimeError::Repository(_) => ErrorKind::Internal,
            RuntimeError::Setup(err) => err.kind(),
            RuntimeError::Resolve(err) => err.kind(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::BattleNotFound(_) => "RUNTIME_BATTLE_NOT_FOUND",
            RuntimeError::Repository(RepositoryError::AlreadyExists(_)) => {
                "RUNTIME_BATTLE_EXISTS"
            }
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
            RuntimeError::Setup(err) => err.error_code(),
            RuntimeError::Resolve(err) => err.error_code(),
        }
    }
}
