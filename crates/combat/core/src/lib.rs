//! Deterministic tactical combat rules.
//!
//! `combat-core` defines the canonical combat model: the four-slot rank line,
//! the card factory that turns equipment into playable cards, the behavior
//! tree evaluator that drives NPC turns, and the [`engine::CombatEngine`] that
//! resolves one request against a [`Battle`] aggregate. Randomness, time and
//! template lookups come in through the oracles bundled in [`env::Env`]; the
//! core never reaches for ambient state.
pub mod ai;
pub mod card;
pub mod config;
pub mod deck;
pub mod engine;
pub mod env;
pub mod error;
pub mod rank;
pub mod state;
pub mod view;

pub use ai::{BehaviorNode, Condition, Evaluator, Intent, NpcAction, TacticalContext, TargetView};
pub use card::{
    Card, CardFactory, CardId, DamageCategory, Effect, EquipmentDefinition, JamChance, Modifier,
    ScalingRule, ScalingRules, SkillVector,
};
pub use config::CombatConfig;
pub use deck::Deck;
pub use engine::{
    BattleSetup, CombatEngine, EndTurnOutcome, EnemySpawn, LoadoutEntry, ParticipantSetup,
    PlayCard, PlayOutcome, ResolveError, SetupError, start_battle,
};
pub use env::{
    ClockOracle, CombatEnv, Env, FixedClock, NpcTemplate, OracleError, PcgRng, RngOracle,
    TemplateOracle, compute_seed, shuffle,
};
pub use error::{CombatError, ErrorKind};
pub use rank::{
    KnockbackOutcome, MoveDirection, MoveOutcome, Rank, RankEntity, RankSet, RankSystem, Side,
};
pub use state::{
    Battle, BattleEvent, BattleId, BattleLog, BattleOutcome, BattleStatus, EntityId, LogEntry,
    NpcInstance, Participant, PassReason, StatusEffect, StatusKind, TurnPhase, TurnState,
};
pub use view::{BattleView, CardView, EnemyView, ParticipantView};
