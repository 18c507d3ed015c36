use crate::card::{DamageCategory, Effect};
use crate::rank::RankSet;

/// Weapon template: the static stats a card is seeded from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentDefinition {
    pub id: String,
    pub name: String,
    pub base_damage: u32,
    pub category: DamageCategory,
    pub valid_ranks: RankSet,
    pub ap_cost: u32,
    pub stamina_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
    /// Wear, 0 (ruined) to 100 (pristine).
    #[cfg_attr(feature = "serde", serde(default = "EquipmentDefinition::pristine"))]
    pub condition: u32,
    /// Overuse; grows without bound.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heat: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sabotaged: bool,
}

impl EquipmentDefinition {
    pub const PRISTINE: u32 = 100;

    #[cfg(feature = "serde")]
    fn pristine() -> u32 {
        Self::PRISTINE
    }
}

/// Optional bonus ("artifact") folded into a card during synthesis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub id: String,
    /// Prepended to the card name, e.g. "Serrated".
    pub prefix: String,
    /// Equipment categories this modifier attaches to.
    pub categories: Vec<DamageCategory>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_bonus: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<Effect>,
}

impl Modifier {
    pub fn fits(&self, category: DamageCategory) -> bool {
        self.categories.contains(&category)
    }
}
