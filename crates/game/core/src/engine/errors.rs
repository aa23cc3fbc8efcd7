//! Error types for turn resolution.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, MapError, StateError};

/// Errors surfaced while resolving a turn or a forcing operation.
///
/// Only [`TurnError::InvalidMovementVector`] is caused by the caller; it is
/// raised before any mutation. The remaining variants mean the engine found
/// its own bookkeeping inconsistent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("invalid movement vector {{{d_row}, {d_col}}}: expected a unit step or the null vector")]
    InvalidMovementVector { d_row: i32, d_col: i32 },

    #[error("character {0} not found")]
    UnknownCharacter(CharacterId),

    #[error("occupancy update failed: {0}")]
    Map(#[from] MapError),

    #[error("state invariant violated: {0}")]
    Invariant(#[from] StateError),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::InvalidMovementVector { .. } => ErrorSeverity::Validation,
            TurnError::UnknownCharacter(_) => ErrorSeverity::Internal,
            TurnError::Map(error) => match error.severity() {
                // Lookups during a turn are engine-generated, never user input.
                ErrorSeverity::Validation => ErrorSeverity::Internal,
                other => other,
            },
            TurnError::Invariant(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::InvalidMovementVector { .. } => "TURN_INVALID_MOVEMENT_VECTOR",
            TurnError::UnknownCharacter(_) => "TURN_UNKNOWN_CHARACTER",
            TurnError::Map(error) => error.error_code(),
            TurnError::Invariant(error) => error.error_code(),
        }
    }
}
