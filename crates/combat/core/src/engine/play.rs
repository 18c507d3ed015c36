use tracing::debug;

use crate::card::{Card, CardId, Effect};
use crate::config::CombatConfig;
use crate::engine::{ResolveError, check_victory, record};
use crate::env::{ClockOracle, CombatEnv};
use crate::state::{Battle, BattleEvent, BattleOutcome, EntityId, TurnPhase};

/// A participant's request to play one card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayCard {
    pub participant: EntityId,
    pub card: CardId,
    /// Explicit target. Defaults to the first living hostile.
    pub target: Option<EntityId>,
}

/// What a resolved play did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayOutcome {
    pub card: CardId,
    pub target: Option<EntityId>,
    /// Damage dealt to the target by the card itself.
    pub damage: u32,
    /// The card was played outside its valid ranks.
    pub off_rank: bool,
    pub outcome: BattleOutcome,
}

pub(super) fn resolve(
    battle: &mut Battle,
    config: &CombatConfig,
    env: CombatEnv<'_>,
    request: &PlayCard,
) -> Result<PlayOutcome, ResolveError> {
    let clock = env.clock()?;
    let actor = request.participant;

    // Validate
    let participant = battle
        .participant(actor)
        .ok_or(ResolveError::UnknownParticipant(actor))?;
    let current = battle.turn.current();
    if current != Some(actor) || battle.turn.phase != TurnPhase::PlayerTurn {
        return Err(ResolveError::NotYourTurn { actor, current });
    }
    let card = participant
        .deck
        .hand_card(&request.card)
        .cloned()
        .ok_or_else(|| ResolveError::CardNotInHand {
            participant: actor,
            card: request.card.clone(),
        })?;
    if participant.energy < card.ap_cost {
        return Err(ResolveError::InsufficientEnergy {
            required: card.ap_cost,
            available: participant.energy,
        });
    }
    let target = select_target(battle, &card, request.target)?;

    // Apply
    let in_rank = battle
        .rank_of(actor)
        .is_some_and(|rank| card.valid_ranks.contains_rank(rank));
    let damage = config.scale_by_efficacy(card.damage, in_rank);

    if let Some(participant) = battle.participant_mut(actor) {
        participant.energy -= card.ap_cost;
        participant.deck.play(&card.id);
    }
    let dealt = match target {
        Some(target) => battle.npc_mut(target).map_or(0, |npc| npc.take_damage(damage)),
        None => 0,
    };
    record(
        battle,
        clock,
        Some(actor),
        BattleEvent::CardPlayed {
            card: card.id.clone(),
            name: card.name.clone(),
            target,
            damage: dealt,
            off_rank: !in_rank,
        },
    );

    for effect in &card.effects {
        apply_effect(battle, config, clock, actor, target, *effect, in_rank);
    }

    debug!(
        battle = %battle.id,
        participant = %actor,
        card = %card.id,
        damage = dealt,
        off_rank = !in_rank,
        "card played"
    );

    check_victory(battle, clock);

    Ok(PlayOutcome {
        card: card.id,
        target,
        damage: dealt,
        off_rank: !in_rank,
        outcome: battle.outcome(),
    })
}

/// Resolves the card's target: the explicit one if given, otherwise the first
/// living hostile. Cards that affect only the player get no target.
fn select_target(
    battle: &Battle,
    card: &Card,
    requested: Option<EntityId>,
) -> Result<Option<EntityId>, ResolveError> {
    if !card.needs_target() {
        return Ok(None);
    }
    match requested {
        Some(id) => battle
            .living_hostiles()
            .find(|npc| npc.id == id)
            .map(|npc| Some(npc.id))
            .ok_or(ResolveError::UnknownTarget(id)),
        None => battle
            .living_hostiles()
            .next()
            .map(|npc| Some(npc.id))
            .ok_or(ResolveError::NoLivingTarget),
    }
}

fn apply_effect(
    battle: &mut Battle,
    config: &CombatConfig,
    clock: &(impl ClockOracle + ?Sized),
    actor: EntityId,
    target: Option<EntityId>,
    effect: Effect,
    in_rank: bool,
) {
    let event = match (effect, target) {
        (Effect::Push(force), Some(target)) => {
            let Some(knock) = battle.ranks.apply_knockback(target, force) else {
                return;
            };
            let bonus_damage = if knock.wall_slam {
                battle
                    .npc_mut(target)
                    .map_or(0, |npc| npc.take_damage(config.wall_slam_damage))
            } else {
                0
            };
            BattleEvent::Knockback {
                target,
                rank: knock.new_rank,
                wall_slam: knock.wall_slam,
                bonus_damage,
            }
        }
        (Effect::Pull(force), Some(target)) => {
            let Some(pull) = battle.ranks.apply_pull(target, force) else {
                return;
            };
            BattleEvent::Pulled {
                target,
                rank: pull.new_rank,
            }
        }
        (Effect::Inflict { turns: 0, .. }, _) => return,
        (Effect::Inflict { status, turns }, Some(target)) => {
            let Some(npc) = battle.npc_mut(target) else {
                return;
            };
            npc.add_status(status, turns);
            BattleEvent::StatusApplied {
                target,
                status,
                turns,
            }
        }
        (Effect::Heal(amount), _) => {
            let amount = config.scale_by_efficacy(amount, in_rank);
            let Some(participant) = battle.participant_mut(actor) else {
                return;
            };
            BattleEvent::Healed {
                amount: participant.heal(amount),
            }
        }
        (Effect::Move(direction), _) => {
            let Some(from) = battle.rank_of(actor) else {
                return;
            };
            match battle.ranks.move_entity(actor, direction) {
                Some(step) if step.success => BattleEvent::Moved {
                    entity: actor,
                    from,
                    to: step.new_rank,
                },
                _ => BattleEvent::MoveBlocked {
                    entity: actor,
                    direction,
                },
            }
        }
        (Effect::Push(_) | Effect::Pull(_) | Effect::Inflict { .. }, None) => return,
    };
    record(battle, clock, Some(actor), event);
}
