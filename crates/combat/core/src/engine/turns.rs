//! End-turn flow: walking the turn order and running NPC turns.

use behavior_tree::Status;
use tracing::{debug, warn};

use crate::ai::{Evaluator, Intent, TargetView};
use crate::config::CombatConfig;
use crate::engine::{SHUFFLE_RECYCLE, ResolveError, check_victory, record};
use crate::env::{ClockOracle, CombatEnv, OracleError, RngOracle, TemplateOracle, compute_seed};
use crate::rank::MoveDirection;
use crate::state::{
    Battle, BattleEvent, BattleOutcome, EntityId, PassReason, StatusKind, TurnPhase,
};

/// What happened between ending one turn and the next participant's turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnOutcome {
    /// Participant whose turn it is now, if the battle is still running.
    pub next_actor: Option<EntityId>,
    pub round: u32,
    /// NPC turns resolved on the way, including stunned and bleeding ones.
    pub npc_turns: usize,
    pub outcome: BattleOutcome,
}

pub(super) fn resolve(
    battle: &mut Battle,
    config: &CombatConfig,
    env: CombatEnv<'_>,
    actor: EntityId,
) -> Result<EndTurnOutcome, ResolveError> {
    if battle.participant(actor).is_none() {
        return Err(ResolveError::UnknownParticipant(actor));
    }
    let current = battle.turn.current();
    if current != Some(actor) || battle.turn.phase != TurnPhase::PlayerTurn {
        return Err(ResolveError::NotYourTurn { actor, current });
    }

    let templates = env.templates()?;
    let rng = env.rng()?;
    let clock = env.clock()?;

    battle.turn.phase = TurnPhase::EnemyTurn;
    let mut npc_turns = 0;

    // One lap at most: the lap ends back at `actor` at the latest.
    for _ in 0..battle.turn.order.len() {
        if battle.turn.advance() {
            battle.round += 1;
            let round = battle.round;
            record(battle, clock, None, BattleEvent::RoundStarted { round });
        }
        let Some(next) = battle.turn.current() else {
            break;
        };

        if let Some(participant) = battle.participant(next) {
            if participant.is_alive() {
                begin_participant_turn(battle, config, rng, next);
                return Ok(EndTurnOutcome {
                    next_actor: Some(next),
                    round: battle.round,
                    npc_turns,
                    outcome: battle.outcome(),
                });
            }
            pass(battle, clock, next, PassReason::Defeated);
            continue;
        }

        if battle.npc(next).is_some() {
            npc_turns += 1;
            run_npc_turn(battle, templates, clock, next)?;
            check_victory(battle, clock);
            if !battle.is_active() {
                return Ok(EndTurnOutcome {
                    next_actor: None,
                    round: battle.round,
                    npc_turns,
                    outcome: battle.outcome(),
                });
            }
            continue;
        }

        warn!(battle = %battle.id, actor = %next, "turn order names an unknown actor");
        pass(battle, clock, next, PassReason::UnknownActor);
    }

    // Only reachable if no participant is left standing.
    check_victory(battle, clock);
    Ok(EndTurnOutcome {
        next_actor: None,
        round: battle.round,
        npc_turns,
        outcome: battle.outcome(),
    })
}

fn pass(
    battle: &mut Battle,
    clock: &(impl ClockOracle + ?Sized),
    actor: EntityId,
    reason: PassReason,
) {
    debug!(battle = %battle.id, %actor, %reason, "turn passed");
    record(battle, clock, Some(actor), BattleEvent::TurnPassed { actor, reason });
}

fn begin_participant_turn(
    battle: &mut Battle,
    config: &CombatConfig,
    rng: &(impl RngOracle + ?Sized),
    id: EntityId,
) {
    let seed = compute_seed(battle.seed, battle.nonce, id.0, SHUFFLE_RECYCLE);
    battle.turn.phase = TurnPhase::PlayerTurn;
    if let Some(participant) = battle.participant_mut(id) {
        participant.refill_energy();
        participant.deck.refill_hand(config.hand_size, rng, seed);
    }
}

/// Resolves one NPC's turn: status upkeep, one tree evaluation, intents.
fn run_npc_turn(
    battle: &mut Battle,
    templates: &(impl TemplateOracle + ?Sized),
    clock: &(impl ClockOracle + ?Sized),
    id: EntityId,
) -> Result<(), ResolveError> {
    let Some(npc) = battle.npc_mut(id) else {
        return Ok(());
    };
    if !npc.is_alive() {
        pass(battle, clock, id, PassReason::Defeated);
        return Ok(());
    }

    if npc.tick_status(StatusKind::Bleeding) {
        let damage = npc.take_damage(1);
        let alive = npc.is_alive();
        record(
            battle,
            clock,
            Some(id),
            BattleEvent::StatusDamage {
                entity: id,
                status: StatusKind::Bleeding,
                damage,
            },
        );
        if !alive {
            return Ok(());
        }
    }

    let Some(npc) = battle.npc_mut(id) else {
        return Ok(());
    };
    if npc.tick_status(StatusKind::Stunned) {
        pass(battle, clock, id, PassReason::Stunned);
        return Ok(());
    }

    let Some(npc) = battle.npc(id) else {
        return Ok(());
    };
    let tree = templates
        .behavior(&npc.behavior)
        .ok_or_else(|| OracleError::BehaviorTreeNotFound(npc.behavior.clone()))?;
    let targets: Vec<TargetView> = battle
        .participants
        .iter()
        .filter_map(|p| {
            Some(TargetView {
                id: p.id,
                hp: p.hp,
                max_hp: p.max_hp,
                rank: battle.rank_of(p.id)?,
            })
        })
        .collect();

    let mut evaluator = Evaluator::new(npc, &battle.ranks, &targets);
    let status = evaluator.run(tree);
    let intents = evaluator.drain_intents();
    let name = npc.name.clone();
    if status == Status::Failure {
        debug!(battle = %battle.id, npc = %id, "behavior tree failed");
    }

    apply_intents(battle, clock, id, &name, &intents);
    Ok(())
}

/// Applies intents in order. Attacks on the same target are summed into one
/// hit.
fn apply_intents(
    battle: &mut Battle,
    clock: &(impl ClockOracle + ?Sized),
    id: EntityId,
    name: &str,
    intents: &[Intent],
) {
    if intents.is_empty() {
        record(battle, clock, Some(id), BattleEvent::NpcIdle { npc: id });
        return;
    }

    let mut hits: Vec<(EntityId, u32, bool)> = Vec::new();
    for intent in intents {
        match *intent {
            Intent::Move { from, to } => {
                let moved = MoveDirection::between(from, to)
                    .and_then(|direction| battle.ranks.move_entity(id, direction))
                    .is_some_and(|step| step.success);
                if moved {
                    record(battle, clock, Some(id), BattleEvent::Moved { entity: id, from, to });
                }
            }
            Intent::Attack {
                target,
                damage,
                ammo_cost,
                ranged,
            } => {
                if let Some(npc) = battle.npc_mut(id) {
                    npc.ammo = npc.ammo.saturating_sub(ammo_cost);
                }
                match hits.iter_mut().find(|(hit, ..)| *hit == target) {
                    Some((_, total, any_ranged)) => {
                        *total = total.saturating_add(damage);
                        *any_ranged |= ranged;
                    }
                    None => hits.push((target, damage, ranged)),
                }
            }
        }
    }

    for (target, total, ranged) in hits {
        let Some(participant) = battle.participant_mut(target) else {
            continue;
        };
        let damage = participant.take_damage(total);
        record(
            battle,
            clock,
            Some(id),
            BattleEvent::NpcAttacked {
                npc: id,
                npc_name: name.to_owned(),
                target,
                damage,
                ranged,
            },
        );
    }
}
