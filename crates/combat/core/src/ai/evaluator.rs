use behavior_tree::{Behavior, Status};
use tracing::debug;

use crate::ai::{BehaviorNode, Intent, TacticalContext, TargetView};
use crate::rank::RankSystem;
use crate::state::NpcInstance;

/// Runs behavior trees for one NPC.
///
/// The evaluator works on copies: rank and ammo changes made by action
/// leaves are visible to later nodes of the same walk but never reach the
/// battle. The caller applies the drained intents.
#[derive(Clone, Debug)]
pub struct Evaluator<'a> {
    ctx: TacticalContext<'a>,
}

impl<'a> Evaluator<'a> {
    pub fn new(npc: &NpcInstance, ranks: &RankSystem, targets: &'a [TargetView]) -> Self {
        Self {
            ctx: TacticalContext::new(npc.clone(), ranks.clone(), targets),
        }
    }

    /// Walks `tree` once from the root.
    pub fn run(&mut self, tree: &BehaviorNode) -> Status {
        let status = tree.tick(&mut self.ctx);
        debug!(
            npc = %self.ctx.npc().id,
            ?status,
            intents = self.ctx.intents().len(),
            "behavior tree evaluated"
        );
        status
    }

    /// Removes and returns the intents emitted so far, in emission order.
    pub fn drain_intents(&mut self) -> Vec<Intent> {
        self.ctx.take_intents()
    }

    /// The evaluator's working copy of the NPC.
    pub fn npc(&self) -> &NpcInstance {
        self.ctx.npc()
    }
}
