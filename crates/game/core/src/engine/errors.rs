//! Error types for the cast pipeline.

use crate::action::TargetError;
use crate::error::{ErrorSeverity, GameError};

/// Errors that abort a cast or a turn step.
///
/// Everything up to the failure point stays applied: effects already resolved
/// before the error are not rolled back.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastError {
    #[error(transparent)]
    Target(#[from] TargetError),

    #[error("event cascade reached depth {depth} (limit {limit})")]
    CascadeTooDeep { depth: usize, limit: usize },

    #[error("unknown ability '{id}'")]
    UnknownAbility { id: String },

    #[error("unknown entity type '{id}'")]
    UnknownEntityType { id: String },

    #[error("no agent is waiting for a turn")]
    NoActiveTurn,
}

impl CastError {
    pub fn unknown_ability(id: impl Into<String>) -> Self {
        Self::UnknownAbility { id: id.into() }
    }
}

impl GameError for CastError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Target(error) => error.severity(),
            Self::CascadeTooDeep { .. } => ErrorSeverity::Fatal,
            Self::UnknownAbility { .. } | Self::UnknownEntityType { .. } => {
                ErrorSeverity::Validation
            }
            Self::NoActiveTurn => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Target(error) => error.error_code(),
            Self::CascadeTooDeep { .. } => "CAST_CASCADE_TOO_DEEP",
            Self::UnknownAbility { .. } => "CAST_UNKNOWN_ABILITY",
            Self::UnknownEntityType { .. } => "CAST_UNKNOWN_ENTITY_TYPE",
            Self::NoActiveTurn => "CAST_NO_ACTIVE_TURN",
        }
    }
}
