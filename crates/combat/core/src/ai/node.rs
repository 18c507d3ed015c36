//! Tactical node vocabulary.
//!
//! Composites and decorators come from `behavior_tree`; leaves are closed
//! enums so every predicate and effect is matched exhaustively.

use behavior_tree::{AlwaysSucceed, Behavior, Inverter, Selector, Sequence, Status};

use crate::ai::{Intent, TacticalContext};
use crate::rank::{MoveDirection, Rank};

/// One node of a data-described behavior tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorNode {
    Selector(Selector<BehaviorNode>),
    Sequence(Sequence<BehaviorNode>),
    Inverter(Inverter<Box<BehaviorNode>>),
    AlwaysSucceed(AlwaysSucceed<Box<BehaviorNode>>),
    Condition(Condition),
    Action(NpcAction),
}

impl BehaviorNode {
    pub fn selector(children: Vec<BehaviorNode>) -> Self {
        Self::Selector(Selector::new(children))
    }

    pub fn sequence(children: Vec<BehaviorNode>) -> Self {
        Self::Sequence(Sequence::new(children))
    }

    pub fn inverter(child: BehaviorNode) -> Self {
        Self::Inverter(Inverter::new(Box::new(child)))
    }

    pub fn always_succeed(child: BehaviorNode) -> Self {
        Self::AlwaysSucceed(AlwaysSucceed::new(Box::new(child)))
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + match self {
            BehaviorNode::Selector(node) => node.children().iter().map(Self::node_count).sum(),
            BehaviorNode::Sequence(node) => node.children().iter().map(Self::node_count).sum(),
            BehaviorNode::Inverter(node) => node.child().node_count(),
            BehaviorNode::AlwaysSucceed(node) => node.child().node_count(),
            BehaviorNode::Condition(_) | BehaviorNode::Action(_) => 0,
        }
    }
}

impl<'a> Behavior<TacticalContext<'a>> for BehaviorNode {
    fn tick(&self, ctx: &mut TacticalContext<'a>) -> Status {
        match self {
            BehaviorNode::Selector(node) => node.tick(ctx),
            BehaviorNode::Sequence(node) => node.tick(ctx),
            BehaviorNode::Inverter(node) => node.tick(ctx),
            BehaviorNode::AlwaysSucceed(node) => node.tick(ctx),
            BehaviorNode::Condition(condition) => condition.tick(ctx),
            BehaviorNode::Action(action) => action.tick(ctx),
        }
    }
}

/// Built-in predicates. Never return `Running`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// At least one round of ammo left.
    HasAmmo,
    AmmoAtLeast(u32),
    /// Succeeds if `hp / max_hp < threshold_percent / 100`.
    LowHealth { threshold_percent: u32 },
    /// Succeeds only if the NPC stands exactly on `ideal_rank`.
    InRange { ideal_rank: Rank },
}

impl<'a> Behavior<TacticalContext<'a>> for Condition {
    fn tick(&self, ctx: &mut TacticalContext<'a>) -> Status {
        let npc = ctx.npc();
        let holds = match *self {
            Condition::HasAmmo => npc.ammo > 0,
            Condition::AmmoAtLeast(count) => npc.ammo >= count,
            Condition::LowHealth { threshold_percent } => {
                npc.max_hp > 0
                    && u64::from(npc.hp) * 100
                        < u64::from(threshold_percent) * u64::from(npc.max_hp)
            }
            Condition::InRange { ideal_rank } => ctx.npc_rank() == Some(ideal_rank),
        };
        Status::from(holds)
    }
}

/// Built-in effects. On success each appends exactly one intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NpcAction {
    /// Step one rank toward the front.
    AdvanceTowardTarget,
    /// Step one rank toward the back.
    RetreatFromTarget,
    MeleeAttack { damage: u32 },
    RangedAttack {
        damage: u32,
        #[cfg_attr(feature = "serde", serde(default = "NpcAction::single_round"))]
        ammo_cost: u32,
    },
}

impl NpcAction {
    #[cfg(feature = "serde")]
    fn single_round() -> u32 {
        1
    }

    fn step(ctx: &mut TacticalContext<'_>, direction: MoveDirection) -> Status {
        match ctx.step(direction) {
            Some((from, to)) => {
                ctx.push_intent(Intent::Move { from, to });
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

impl<'a> Behavior<TacticalContext<'a>> for NpcAction {
    fn tick(&self, ctx: &mut TacticalContext<'a>) -> Status {
        match *self {
            NpcAction::AdvanceTowardTarget => Self::step(ctx, MoveDirection::Advance),
            NpcAction::RetreatFromTarget => Self::step(ctx, MoveDirection::Retreat),
            NpcAction::MeleeAttack { damage } => {
                let Some(target) = ctx.primary_target() else {
                    return Status::Failure;
                };
                ctx.push_intent(Intent::Attack {
                    target: target.id,
                    damage,
                    ammo_cost: 0,
                    ranged: false,
                });
                Status::Success
            }
            NpcAction::RangedAttack { damage, ammo_cost } => {
                let Some(target) = ctx.primary_target() else {
                    return Status::Failure;
                };
                if !ctx.spend_ammo(ammo_cost) {
                    return Status::Failure;
                }
                ctx.push_intent(Intent::Attack {
                    target: target.id,
                    damage,
                    ammo_cost,
                    ranged: true,
                });
                Status::Success
            }
        }
    }
}
