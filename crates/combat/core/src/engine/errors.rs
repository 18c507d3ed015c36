//! Errors reported by battle setup and turn resolution.
//!
//! Every variant leaves the battle exactly as it was before the request.

use crate::card::CardId;
use crate::env::OracleError;
use crate::error::{CombatError, ErrorKind};
use crate::state::EntityId;

/// Errors surfaced while resolving a play-card or end-turn request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolveError {
    #[error("battle is not active")]
    BattleNotActive,

    #[error("participant {0} is not in this battle")]
    UnknownParticipant(EntityId),

    #[error("not {actor}'s turn (current actor: {current:?})")]
    NotYourTurn {
        actor: EntityId,
        current: Option<EntityId>,
    },

    #[error("card '{card}' is not in {participant}'s hand")]
    CardNotInHand { participant: EntityId, card: CardId },

    #[error("insufficient energy: need {required}, have {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    #[error("target {0} is not a living hostile")]
    UnknownTarget(EntityId),

    #[error("no living hostile to target")]
    NoLivingTarget,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl CombatError for ResolveError {
    fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::UnknownParticipant(_) => ErrorKind::NotFound,
            ResolveError::Oracle(err) => err.kind(),
            ResolveError::NoLivingTarget => ErrorKind::Internal,
            _ => ErrorKind::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ResolveError::BattleNotActive => "RESOLVE_BATTLE_NOT_ACTIVE",
            ResolveError::UnknownParticipant(_) => "RESOLVE_UNKNOWN_PARTICIPANT",
            ResolveError::NotYourTurn { .. } => "RESOLVE_NOT_YOUR_TURN",
            ResolveError::CardNotInHand { .. } => "RESOLVE_CARD_NOT_IN_HAND",
            ResolveError::InsufficientEnergy { .. } => "RESOLVE_INSUFFICIENT_ENERGY",
            ResolveError::UnknownTarget(_) => "RESOLVE_UNKNOWN_TARGET",
            ResolveError::NoLivingTarget => "RESOLVE_NO_LIVING_TARGET",
            ResolveError::Oracle(err) => err.error_code(),
        }
    }
}

/// Errors surfaced while building a battle from a [`BattleSetup`](super::BattleSetup).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("a battle needs at least one participant")]
    NoParticipants,

    #[error("a battle needs at least one enemy")]
    NoEnemies,

    #[error("entity id {0} is used more than once")]
    DuplicateId(EntityId),

    #[error("entity {id} starts at rank {rank}, outside 1..=4")]
    RankOutOfRange { id: EntityId, rank: u8 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl CombatError for SetupError {
    fn kind(&self) -> ErrorKind {
        match self {
            SetupError::Oracle(err) => err.kind(),
            _ => ErrorKind::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SetupError::NoParticipants => "SETUP_NO_PARTICIPANTS",
            SetupError::NoEnemies => "SETUP_NO_ENEMIES",
            SetupError::DuplicateId(_) => "SETUP_DUPLICATE_ID",
            SetupError::RankOutOfRange { .. } => "SETUP_RANK_OUT_OF_RANGE",
            SetupError::Oracle(err) => err.error_code(),
        }
    }
}
