//! In-memory repository implementations.
mod battle;

pub use battle::InMemoryBattleRepo;
