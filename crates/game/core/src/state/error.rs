//! State management errors.
//!
//! Errors related to board placement and entity allocation. All of them are
//! recoverable: board operations surface them as `false`/`None` to the caller.

use crate::error::{ErrorSeverity, GameError};

/// Reasons a board mutation was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// Coordinate lies outside the board extent.
    #[error("coordinate is out of bounds")]
    OutOfBounds,

    /// The tile type blocks a layer the entity needs.
    #[error("tile type blocks the entity's movement domain")]
    Blocked,

    /// An occupant already claims a layer the entity needs, or the tile is full.
    #[error("tile is occupied by a conflicting entity")]
    Occupied,

    /// The entity is not on the board.
    #[error("entity is not placed on the board")]
    NotPlaced,

    /// The entity is already on the board.
    #[error("entity is already placed on the board")]
    AlreadyPlaced,
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds => "BOARD_OUT_OF_BOUNDS",
            Self::Blocked => "BOARD_BLOCKED",
            Self::Occupied => "BOARD_OCCUPIED",
            Self::NotPlaced => "BOARD_NOT_PLACED",
            Self::AlreadyPlaced => "BOARD_ALREADY_PLACED",
        }
    }
}

/// Errors that occur while creating or destroying entities.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Placement on the board was rejected.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Entity ID allocation overflow (all IDs exhausted).
    #[error("entity id overflow (current: {current})")]
    EntityIdOverflow { current: u32 },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Board(error) => error.severity(),
            Self::EntityIdOverflow { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Board(error) => error.error_code(),
            Self::EntityIdOverflow { .. } => "STATE_ENTITY_ID_OVERFLOW",
        }
    }
}
