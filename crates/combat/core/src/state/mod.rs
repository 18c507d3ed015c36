//! Authoritative battle state.
//!
//! A [`Battle`] is one isolated aggregate: its participants, NPC instances,
//! rank line, turn order and log. The engine mutates it through an exclusive
//! reference for the span of one request; nothing outside that call keeps a
//! reference into it.
mod battle;
mod ids;
mod log;
mod npc;
mod participant;

pub use battle::{Battle, BattleOutcome, BattleStatus, TurnPhase, TurnState};
pub use ids::{BattleId, EntityId};
pub use log::{BattleEvent, BattleLog, LogEntry, PassReason};
pub use npc::{NpcInstance, StatusEffect, StatusKind};
pub use participant::Participant;
