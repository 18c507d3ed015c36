//! Cards: playable actions synthesized from equipment.
//!
//! - [`EquipmentDefinition`] and [`Modifier`] are static templates
//! - [`SkillVector`] and [`ScalingRules`] scale damage by skill level
//! - [`CardFactory`] turns them into an immutable [`Card`]
//! - [`JamChance`] is the card's failure probability

mod equipment;
mod factory;
mod jam;
mod skills;

use std::collections::BTreeSet;

pub use equipment::{EquipmentDefinition, Modifier};
pub use factory::CardFactory;
pub use jam::JamChance;
pub use skills::{ScalingRule, ScalingRules, SkillVector};

use crate::rank::{MoveDirection, RankSet};
use crate::state::StatusKind;

/// Damage categories used for modifier compatibility and skill scaling.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageCategory {
    Blunt,
    Blade,
    Ballistic,
    Energy,
    Explosive,
}

/// Secondary effects carried by a card, resolved in list order after damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Knock the target back this many ranks.
    Push(u8),
    /// Drag the target forward this many ranks.
    Pull(u8),
    /// Restore hp to the player who played the card.
    Heal(u32),
    /// Move the player who played the card one rank.
    Move(MoveDirection),
    /// Afflict the target with a status.
    Inflict { status: StatusKind, turns: u8 },
}

impl Effect {
    /// Effects that need an enemy target to resolve.
    pub const fn is_hostile(&self) -> bool {
        matches!(
            self,
            Effect::Push(_) | Effect::Pull(_) | Effect::Inflict { .. }
        )
    }
}

/// Identifier of a synthesized card, derived from its inputs.
///
/// Copies of the same equipment share an id; a hand lookup takes the first
/// match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A playable action. Immutable once synthesized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub damage: u32,
    /// `None` for movement cards.
    pub category: Option<DamageCategory>,
    pub valid_ranks: RankSet,
    pub ap_cost: u32,
    pub stamina_cost: u32,
    pub effects: Vec<Effect>,
    pub jam_chance: JamChance,
    pub tags: BTreeSet<String>,
}

impl Card {
    /// Whether playing this card needs an enemy target.
    pub fn needs_target(&self) -> bool {
        self.damage > 0 || self.effects.iter().any(Effect::is_hostile)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
