use crate::card::SkillVector;
use crate::deck::Deck;
use crate::state::EntityId;

/// Combat state of one player-controlled combatant.
///
/// Created when the battle starts and never removed: hp clamps at zero and
/// the battle ends instead. The participant's rank lives on the battle's
/// rank line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub id: EntityId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub skills: SkillVector,
    pub deck: Deck,
}

impl Participant {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduces hp, clamping at zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        before - self.hp
    }

    /// Restores hp up to the maximum. Returns the hp actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    pub fn refill_energy(&mut self) {
        self.energy = self.max_energy;
    }
}
