//! NPC decision making.
//!
//! Behavior trees are data ([`BehaviorNode`]) walked fresh on every NPC turn.
//! Condition leaves read the [`TacticalContext`]; action leaves append
//! [`Intent`]s that the engine applies afterwards. Nothing here writes to
//! the battle.
mod context;
mod evaluator;
mod intent;
mod node;

pub use context::{TacticalContext, TargetView};
pub use evaluator::Evaluator;
pub use intent::Intent;
pub use node::{BehaviorNode, Condition, NpcAction};
