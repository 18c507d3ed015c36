//! Read-only projection of a battle for callers.

use crate::card::{CardId, JamChance};
use crate::rank::Rank;
use crate::state::{
    Battle, BattleId, BattleOutcome, BattleStatus, EntityId, StatusEffect, TurnPhase,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    pub damage: u32,
    pub ap_cost: u32,
    pub jam_chance: JamChance,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantView {
    pub id: EntityId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub rank: Option<Rank>,
    pub hand: Vec<CardView>,
    pub draw_pile: usize,
    pub discard_pile: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyView {
    pub id: EntityId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub rank: Option<Rank>,
    pub ammo: u32,
    pub statuses: Vec<StatusEffect>,
}

/// Snapshot suitable for serialization to any wire format.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleView {
    pub id: BattleId,
    pub status: BattleStatus,
    pub outcome: BattleOutcome,
    pub round: u32,
    pub phase: TurnPhase,
    pub current_actor: Option<EntityId>,
    pub participants: Vec<ParticipantView>,
    pub enemies: Vec<EnemyView>,
    /// Rendered log lines, oldest first.
    pub log: Vec<String>,
}

impl BattleView {
    /// Projects `battle`, keeping the last `log_tail` log entries.
    pub fn from_battle(battle: &Battle, log_tail: usize) -> Self {
        let participants = battle
            .participants
            .iter()
            .map(|p| ParticipantView {
                id: p.id,
                name: p.name.clone(),
                hp: p.hp,
                max_hp: p.max_hp,
                energy: p.energy,
                max_energy: p.max_energy,
                rank: battle.rank_of(p.id),
                hand: p
                    .deck
                    .hand()
                    .iter()
                    .map(|card| CardView {
                        id: card.id.clone(),
                        name: card.name.clone(),
                        damage: card.damage,
                        ap_cost: card.ap_cost,
                        jam_chance: card.jam_chance,
                    })
                    .collect(),
                draw_pile: p.deck.draw_pile().len(),
                discard_pile: p.deck.discard_pile().len(),
            })
            .collect();

        let enemies = battle
            .npcs
            .iter()
            .map(|npc| EnemyView {
                id: npc.id,
                name: npc.name.clone(),
                hp: npc.hp,
                max_hp: npc.max_hp,
                rank: battle.rank_of(npc.id),
                ammo: npc.ammo,
                statuses: npc.statuses.clone(),
            })
            .collect();

        Self {
            id: battle.id,
            status: battle.status(),
            outcome: battle.outcome(),
            round: battle.round,
            phase: battle.turn.phase,
            current_actor: battle.turn.current(),
            participants,
            enemies,
            log: battle
                .log
                .tail(log_tail)
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
