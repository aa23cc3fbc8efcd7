//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, initial state validation and content
//! loading so clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ErrorSeverity, GameError, StateError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error("initial game state is invalid")]
    InitialState(#[source] StateError),

    #[error("failed to load content")]
    Content(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl RuntimeError {
    pub(crate) fn content(error: anyhow::Error) -> Self {
        RuntimeError::Content(error.into())
    }

    /// True when the caller supplied something malformed and may retry.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            RuntimeError::Turn(error) if error.severity() == ErrorSeverity::Validation
        )
    }
}
