//! Oracle access errors.

use crate::error::{CombatError, ErrorKind};

/// Errors that occur when accessing oracle data.
///
/// A missing oracle is a wiring bug in the caller; a missing template is a
/// bad reference in content or in the request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("TemplateOracle not available")]
    TemplatesNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("ClockOracle not available")]
    ClockNotAvailable,

    #[error("equipment template '{0}' not found")]
    EquipmentNotFound(String),

    #[error("modifier template '{0}' not found")]
    ModifierNotFound(String),

    #[error("npc template '{0}' not found")]
    NpcTemplateNotFound(String),

    #[error("behavior tree '{0}' not found")]
    BehaviorTreeNotFound(String),
}

impl CombatError for OracleError {
    fn kind(&self) -> ErrorKind {
        use OracleError::*;
        match self {
            TemplatesNotAvailable | RngNotAvailable | ClockNotAvailable => ErrorKind::Internal,
            EquipmentNotFound(_)
            | ModifierNotFound(_)
            | NpcTemplateNotFound(_)
            | BehaviorTreeNotFound(_) => ErrorKind::NotFound,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            TemplatesNotAvailable => "ORACLE_TEMPLATES_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ClockNotAvailable => "ORACLE_CLOCK_NOT_AVAILABLE",
            EquipmentNotFound(_) => "ORACLE_EQUIPMENT_NOT_FOUND",
            ModifierNotFound(_) => "ORACLE_MODIFIER_NOT_FOUND",
            NpcTemplateNotFound(_) => "ORACLE_NPC_TEMPLATE_NOT_FOUND",
            BehaviorTreeNotFound(_) => "ORACLE_BEHAVIOR_TREE_NOT_FOUND",
        }
    }
}
