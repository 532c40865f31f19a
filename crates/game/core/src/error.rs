//! Common error infrastructure for tactics-core.
//!
//! Domain-specific errors (e.g., `BoardError`, `TargetError`) are defined in their
//! respective modules alongside the operations that produce them. This module
//! provides the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized by how the caller should react
//! - **Stable Codes**: Every variant maps to a static code usable in tests and diagnostics

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The immediate caller decides whether to continue or retry
///   with different parameters (out-of-bounds coordinates, occupied tiles)
/// - **Validation**: Malformed definitions rejected at load or persistence time
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Aborts the enclosing cast (unresolvable targets, runaway cascades)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - surfaced as a `false`/`None` result to the caller.
    ///
    /// Examples: destination blocked, coordinate outside the board
    Recoverable,

    /// Validation error - definition content is malformed.
    ///
    /// Examples: missing identity, duplicate identity, dangling reference
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: reverse index desync. These indicate bugs.
    Internal,

    /// Fatal error - the cast cannot continue.
    ///
    /// Examples: target name absent from the target database
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error aborts the enclosing cast.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all tactics-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
