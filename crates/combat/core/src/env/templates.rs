use crate::ai::BehaviorNode;
use crate::card::{EquipmentDefinition, Modifier, ScalingRules};

/// Static stats an NPC instance is spawned from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcTemplate {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    pub stamina: u32,
    pub morale: u32,
    pub ammo: u32,
    /// Behavior tree id evaluated on the NPC's turns.
    pub behavior: String,
}

/// Read-only catalog of combat templates.
///
/// Implementations are loaded once and shared; lookups never mutate.
pub trait TemplateOracle: Send + Sync {
    fn equipment(&self, id: &str) -> Option<&EquipmentDefinition>;

    fn modifier(&self, id: &str) -> Option<&Modifier>;

    fn npc(&self, id: &str) -> Option<&NpcTemplate>;

    fn behavior(&self, id: &str) -> Option<&BehaviorNode>;

    /// Skill scaling table used when synthesizing cards.
    fn scaling(&self) -> &ScalingRules;
}
