//! Enemy combatants spawned from NPC templates.

use crate::rank::Side;
use crate::state::{BattleId, EntityId};

/// Lingering conditions an NPC can carry between turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatusKind {
    /// Skips its next turn.
    Stunned,
    /// Loses 1 hp at the start of each of its turns.
    Bleeding,
}

/// A status with the number of turns it has left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub turns: u8,
}

/// A live enemy in one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcInstance {
    pub id: EntityId,
    pub battle: BattleId,
    /// Template this instance was spawned from.
    pub template: String,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub stamina: u32,
    pub morale: u32,
    pub ammo: u32,
    pub side: Side,
    pub statuses: Vec<StatusEffect>,
    /// Behavior tree evaluated on this NPC's turns.
    pub behavior: String,
}

impl NpcInstance {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduces hp, clamping at zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        before - self.hp
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.iter().any(|status| status.kind == kind)
    }

    /// Adds a status; re-applying an existing kind extends its duration.
    /// A zero-turn status is ignored.
    pub fn add_status(&mut self, kind: StatusKind, turns: u8) {
        if turns == 0 {
            return;
        }
        match self.statuses.iter_mut().find(|status| status.kind == kind) {
            Some(existing) => existing.turns = existing.turns.saturating_add(turns),
            None => self.statuses.push(StatusEffect { kind, turns }),
        }
    }

    /// Counts one turn off `kind`, dropping it when it runs out.
    /// Returns whether the status was present.
    pub fn tick_status(&mut self, kind: StatusKind) -> bool {
        let Some(index) = self.statuses.iter().position(|status| status.kind == kind) else {
            return false;
        };
        let status = &mut self.statuses[index];
        status.turns = status.turns.saturating_sub(1);
        if status.turns == 0 {
            self.statuses.remove(index);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raider() -> NpcInstance {
        NpcInstance {
            id: EntityId(10),
            battle: BattleId(1),
            template: "raider".into(),
            name: "Raider".into(),
            hp: 12,
            max_hp: 12,
            stamina: 10,
            morale: 50,
            ammo: 2,
            side: Side::Enemy,
            statuses: Vec::new(),
            behavior: "raider".into(),
        }
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut npc = raider();
        assert_eq!(npc.take_damage(20), 12);
        assert_eq!(npc.hp, 0);
        assert!(!npc.is_alive());
    }

    #[test]
    fn statuses_stack_and_expire() {
        let mut npc = raider();
        npc.add_status(StatusKind::Bleeding, 1);
        npc.add_status(StatusKind::Bleeding, 1);
        assert_eq!(npc.statuses.len(), 1);
        assert_eq!(npc.statuses[0].turns, 2);

        assert!(npc.tick_status(StatusKind::Bleeding));
        assert!(npc.has_status(StatusKind::Bleeding));
        assert!(npc.tick_status(StatusKind::Bleeding));
        assert!(!npc.has_status(StatusKind::Bleeding));
        assert!(!npc.tick_status(StatusKind::Stunned));
    }

    #[test]
    fn zero_turn_status_is_ignored() {
        let mut npc = raider();
        npc.add_status(StatusKind::Stunned, 0);
        assert!(npc.statuses.is_empty());
        assert!(!npc.tick_status(StatusKind::Stunned));
    }
}
