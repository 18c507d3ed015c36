use crate::rank::Rank;
use crate::state::EntityId;

/// An instruction emitted by an action leaf for the engine to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// The NPC stepped from one rank to another.
    Move { from: Rank, to: Rank },
    /// The NPC hits a participant.
    Attack {
        target: EntityId,
        damage: u32,
        ammo_cost: u32,
        ranged: bool,
    },
}

impl Intent {
    pub fn is_attack(&self) -> bool {
        matches!(self, Intent::Attack { .. })
    }
}
