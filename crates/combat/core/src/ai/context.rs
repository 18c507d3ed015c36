use crate::ai::Intent;
use crate::rank::{MoveDirection, Rank, RankSystem};
use crate::state::{EntityId, NpcInstance};

/// What an NPC can see of one potential target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetView {
    pub id: EntityId,
    pub hp: u32,
    pub max_hp: u32,
    pub rank: Rank,
}

impl TargetView {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Blackboard for one behavior tree evaluation.
///
/// Holds private copies of the acting NPC and the rank line so action leaves
/// can update rank and ammo for later conditions in the same walk without
/// touching the battle.
#[derive(Clone, Debug)]
pub struct TacticalContext<'a> {
    npc: NpcInstance,
    ranks: RankSystem,
    targets: &'a [TargetView],
    intents: Vec<Intent>,
}

impl<'a> TacticalContext<'a> {
    pub fn new(npc: NpcInstance, ranks: RankSystem, targets: &'a [TargetView]) -> Self {
        Self {
            npc,
            ranks,
            targets,
            intents: Vec::new(),
        }
    }

    pub fn npc(&self) -> &NpcInstance {
        &self.npc
    }

    /// The acting NPC's rank, or `None` if it is not on the line.
    pub fn npc_rank(&self) -> Option<Rank> {
        self.ranks.rank_of(self.npc.id)
    }

    pub fn targets(&self) -> &'a [TargetView] {
        self.targets
    }

    /// First living target in roster order.
    pub fn primary_target(&self) -> Option<&'a TargetView> {
        self.targets.iter().find(|target| target.is_alive())
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub(crate) fn push_intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub(crate) fn take_intents(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.intents)
    }

    /// Steps the NPC one rank. Returns `(from, to)` only if it actually moved.
    pub(crate) fn step(&mut self, direction: MoveDirection) -> Option<(Rank, Rank)> {
        let from = self.npc_rank()?;
        let outcome = self.ranks.move_entity(self.npc.id, direction)?;
        outcome.success.then_some((from, outcome.new_rank))
    }

    /// Spends ammo. Fails without change when there is not enough.
    pub(crate) fn spend_ammo(&mut self, cost: u32) -> bool {
        match self.npc.ammo.checked_sub(cost) {
            Some(left) => {
                self.npc.ammo = left;
                true
            }
            None => false,
        }
    }
}
