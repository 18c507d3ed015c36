//! Persistence adapters for battle aggregates.
//!
//! Battles are stored whole and keyed by [`combat_core::BattleId`]. The
//! service loads a battle, resolves one request and saves it back, so a
//! repository never sees a partially resolved battle.
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileBattleRepo;
pub use memory::InMemoryBattleRepo;
pub use traits::BattleRepository;
