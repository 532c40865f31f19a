//! Definition validation errors.

use crate::error::{ErrorSeverity, GameError};

use super::DefinitionKind;

/// Malformed content detected at load or persistence time, never at cast time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefinitionError {
    #[error("{kind} definition has an empty id")]
    MissingId { kind: DefinitionKind },

    #[error("{kind} id '{id}' is defined more than once")]
    DuplicateId { kind: DefinitionKind, id: String },

    #[error("{kind} '{id}' is referenced but not registered")]
    UnknownReference { kind: DefinitionKind, id: String },
}

impl GameError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingId { .. } => "DEFINITION_MISSING_ID",
            Self::DuplicateId { .. } => "DEFINITION_DUPLICATE_ID",
            Self::UnknownReference { .. } => "DEFINITION_UNKNOWN_REFERENCE",
        }
    }
}
