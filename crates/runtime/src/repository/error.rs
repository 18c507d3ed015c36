//! Error types raised by repository implementations.

use combat_core::BattleId;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("battle repository lock was poisoned")]
    LockPoisoned,

    #[error("{0} already exists")]
    AlreadyExists(BattleId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
