use std::collections::BTreeSet;

use tracing::info;

use crate::card::{CardFactory, SkillVector};
use crate::config::CombatConfig;
use crate::deck::Deck;
use crate::engine::{SHUFFLE_OPENING, SetupError, record};
use crate::env::{CombatEnv, OracleError, compute_seed};
use crate::rank::{MoveDirection, Rank, RankEntity, RankSystem, Side};
use crate::state::{
    Battle, BattleEvent, BattleId, EntityId, NpcInstance, Participant, TurnState,
};

/// One equipment slot of a participant's loadout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadoutEntry {
    pub equipment: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantSetup {
    pub id: EntityId,
    pub name: String,
    pub hp: u32,
    pub energy: u32,
    /// Starting rank, validated against `[1, 4]`.
    pub rank: u8,
    pub skills: SkillVector,
    pub loadout: Vec<LoadoutEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpawn {
    pub id: EntityId,
    /// NPC template id.
    pub template: String,
    pub rank: u8,
}

/// Everything needed to start a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSetup {
    pub id: BattleId,
    /// Base seed for every deck shuffle in the battle.
    pub seed: u64,
    pub participants: Vec<ParticipantSetup>,
    pub enemies: Vec<EnemySpawn>,
}

/// Builds a new active battle.
///
/// Decks are synthesized from each loadout plus an Advance and a Retreat
/// card, shuffled, and an opening hand is drawn. Turn order is participants
/// in setup order followed by enemies in spawn order.
///
/// # Errors
///
/// Returns [`SetupError`] for an empty side, a reused id, a rank off the
/// line, or a template the oracle does not know.
pub fn start_battle(
    setup: &BattleSetup,
    env: CombatEnv<'_>,
    config: &CombatConfig,
) -> Result<Battle, SetupError> {
    if setup.participants.is_empty() {
        return Err(SetupError::NoParticipants);
    }
    if setup.enemies.is_empty() {
        return Err(SetupError::NoEnemies);
    }

    let templates = env.templates()?;
    let rng = env.rng()?;
    let clock = env.clock()?;

    let mut seen = BTreeSet::new();
    let ids = setup
        .participants
        .iter()
        .map(|p| (p.id, p.rank))
        .chain(setup.enemies.iter().map(|e| (e.id, e.rank)));
    for (id, rank) in ids {
        if !seen.insert(id) {
            return Err(SetupError::DuplicateId(id));
        }
        if Rank::new(rank).is_none() {
            return Err(SetupError::RankOutOfRange { id, rank });
        }
    }

    let factory = CardFactory::new(templates.scaling().clone(), config);
    let mut ranks = RankSystem::new();
    let mut participants = Vec::with_capacity(setup.participants.len());

    for member in &setup.participants {
        let mut cards = Vec::with_capacity(member.loadout.len() + 2);
        for entry in &member.loadout {
            let equipment = templates
                .equipment(&entry.equipment)
                .ok_or_else(|| OracleError::EquipmentNotFound(entry.equipment.clone()))?;
            let modifier = entry
                .modifier
                .as_deref()
                .map(|id| {
                    templates
                        .modifier(id)
                        .ok_or_else(|| OracleError::ModifierNotFound(id.to_owned()))
                })
                .transpose()?;
            cards.push(factory.synthesize(equipment, modifier, &member.skills));
        }
        cards.push(factory.synthesize_move(MoveDirection::Advance));
        cards.push(factory.synthesize_move(MoveDirection::Retreat));

        let mut deck = Deck::new(cards);
        deck.shuffle_draw_pile(rng, compute_seed(setup.seed, 0, member.id.0, SHUFFLE_OPENING));
        deck.draw(config.hand_size);

        place(&mut ranks, member.id, member.rank, Side::Player)?;
        participants.push(Participant {
            id: member.id,
            name: member.name.clone(),
            hp: member.hp,
            max_hp: member.hp,
            energy: member.energy,
            max_energy: member.energy,
            skills: member.skills.clone(),
            deck,
        });
    }

    let mut npcs = Vec::with_capacity(setup.enemies.len());
    for spawn in &setup.enemies {
        let template = templates
            .npc(&spawn.template)
            .ok_or_else(|| OracleError::NpcTemplateNotFound(spawn.template.clone()))?;
        if templates.behavior(&template.behavior).is_none() {
            return Err(OracleError::BehaviorTreeNotFound(template.behavior.clone()).into());
        }

        place(&mut ranks, spawn.id, spawn.rank, Side::Enemy)?;
        npcs.push(NpcInstance {
            id: spawn.id,
            battle: setup.id,
            template: template.id.clone(),
            name: template.name.clone(),
            hp: template.max_hp,
            max_hp: template.max_hp,
            stamina: template.stamina,
            morale: template.morale,
            ammo: template.ammo,
            side: Side::Enemy,
            statuses: Vec::new(),
            behavior: template.behavior.clone(),
        });
    }

    let order: Vec<EntityId> = participants
        .iter()
        .map(|p| p.id)
        .chain(npcs.iter().map(|npc| npc.id))
        .collect();

    let mut battle = Battle::new(
        setup.id,
        setup.seed,
        participants,
        npcs,
        ranks,
        TurnState::new(order),
    );
    let event = BattleEvent::BattleStarted {
        participants: battle.participants.len(),
        enemies: battle.npcs.len(),
    };
    record(&mut battle, clock, None, event);
    info!(
        battle = %battle.id,
        participants = battle.participants.len(),
        enemies = battle.npcs.len(),
        "battle started"
    );
    Ok(battle)
}

fn place(ranks: &mut RankSystem, id: EntityId, rank: u8, side: Side) -> Result<(), SetupError> {
    let rank = Rank::new(rank).ok_or(SetupError::RankOutOfRange { id, rank })?;
    if ranks.insert(RankEntity::new(id, rank, side)) {
        Ok(())
    } else {
        Err(SetupError::DuplicateId(id))
    }
}
