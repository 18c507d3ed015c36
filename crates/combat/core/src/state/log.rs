//! Append-only battle log.

use crate::card::CardId;
use crate::rank::{MoveDirection, Rank};
use crate::state::{BattleOutcome, EntityId, StatusKind};

/// Why a turn was skipped without anyone acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PassReason {
    /// The turn order names an id that is neither a participant nor an NPC.
    UnknownActor,
    /// The actor is at 0 hp.
    Defeated,
    /// The actor is stunned.
    Stunned,
}

/// Something that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    BattleStarted {
        participants: usize,
        enemies: usize,
    },
    RoundStarted {
        round: u32,
    },
    CardPlayed {
        card: CardId,
        name: String,
        target: Option<EntityId>,
        damage: u32,
        off_rank: bool,
    },
    Healed {
        amount: u32,
    },
    Knockback {
        target: EntityId,
        rank: Rank,
        wall_slam: bool,
        bonus_damage: u32,
    },
    Pulled {
        target: EntityId,
        rank: Rank,
    },
    Moved {
        entity: EntityId,
        from: Rank,
        to: Rank,
    },
    MoveBlocked {
        entity: EntityId,
        direction: MoveDirection,
    },
    StatusApplied {
        target: EntityId,
        status: StatusKind,
        turns: u8,
    },
    StatusDamage {
        entity: EntityId,
        status: StatusKind,
        damage: u32,
    },
    NpcAttacked {
        npc: EntityId,
        npc_name: String,
        target: EntityId,
        damage: u32,
        ranged: bool,
    },
    NpcIdle {
        npc: EntityId,
    },
    TurnPassed {
        actor: EntityId,
        reason: PassReason,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl core::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BattleEvent::BattleStarted {
                participants,
                enemies,
            } => write!(f, "battle starts: {participants} vs {enemies}"),
            BattleEvent::RoundStarted { round } => write!(f, "round {round} begins"),
            BattleEvent::CardPlayed {
                name,
                target,
                damage,
                off_rank,
                ..
            } => {
                write!(f, "plays {name}")?;
                if let Some(target) = target {
                    write!(f, " on {target} for {damage} damage")?;
                }
                if *off_rank {
                    f.write_str(" (out of position)")?;
                }
                Ok(())
            }
            BattleEvent::Healed { amount } => write!(f, "recovers {amount} hp"),
            BattleEvent::Knockback {
                target,
                rank,
                wall_slam: true,
                bonus_damage,
            } => write!(
                f,
                "{target} is slammed into the wall at {rank} for {bonus_damage} extra damage"
            ),
            BattleEvent::Knockback { target, rank, .. } => {
                write!(f, "{target} is knocked back to {rank}")
            }
            BattleEvent::Pulled { target, rank } => write!(f, "{target} is dragged to {rank}"),
            BattleEvent::Moved { from, to, .. } => write!(f, "moves from {from} to {to}"),
            BattleEvent::MoveBlocked { direction, .. } => {
                write!(f, "cannot {direction} any further")
            }
            BattleEvent::StatusApplied {
                target,
                status,
                turns,
            } => write!(f, "{target} is {status} for {turns} turns"),
            BattleEvent::StatusDamage { status, damage, .. } => {
                write!(f, "suffers {damage} damage from {status}")
            }
            BattleEvent::NpcAttacked {
                npc_name,
                target,
                damage,
                ranged: true,
                ..
            } => write!(f, "{npc_name} fires at {target} for {damage} damage"),
            BattleEvent::NpcAttacked {
                npc_name,
                target,
                damage,
                ..
            } => write!(f, "{npc_name} strikes {target} for {damage} damage"),
            BattleEvent::NpcIdle { .. } => f.write_str("holds position"),
            BattleEvent::TurnPassed { reason, .. } => write!(f, "passes the turn ({reason})"),
            BattleEvent::BattleEnded { outcome } => write!(f, "battle over: {outcome}"),
        }
    }
}

/// One timestamped log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub round: u32,
    /// Clock reading in milliseconds. Informational only.
    pub at_millis: u64,
    pub actor: Option<EntityId>,
    pub event: BattleEvent,
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[r{}] ", self.round)?;
        if let Some(actor) = self.actor {
            write!(f, "{actor} ")?;
        }
        write!(f, "{}", self.event)
    }
}

/// Append-only sequence of log entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `count` entries, oldest first.
    pub fn tail(&self, count: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }
}
