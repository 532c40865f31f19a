//! Target resolution errors.
//!
//! A name an effect needs that is missing from the target database, or bound
//! to the wrong kind of value, is a broken definition rather than a game
//! situation. These errors abort the enclosing cast.

use crate::error::{ErrorSeverity, GameError};

use super::targeting::TargetKind;

/// Errors raised while resolving or binding symbolic target names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetError {
    /// No scope binds the name.
    #[error("target '{name}' is not bound")]
    Missing { name: String },

    /// The name is bound, but to a value of another kind.
    #[error("target '{name}' is bound to {found}, expected {expected}")]
    WrongKind {
        name: String,
        expected: TargetKind,
        found: TargetKind,
    },

    /// The current scope already binds the name.
    #[error("target '{name}' is already bound in this scope")]
    AlreadyBound { name: String },
}

impl TargetError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    pub fn wrong_kind(name: impl Into<String>, expected: TargetKind, found: TargetKind) -> Self {
        Self::WrongKind {
            name: name.into(),
            expected,
            found,
        }
    }

    /// Name the error refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name } | Self::WrongKind { name, .. } | Self::AlreadyBound { name } => {
                name
            }
        }
    }
}

impl GameError for TargetError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "TARGET_MISSING",
            Self::WrongKind { .. } => "TARGET_WRONG_KIND",
            Self::AlreadyBound { .. } => "TARGET_ALREADY_BOUND",
        }
    }
}
