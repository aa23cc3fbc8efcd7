//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`MapError`, `StateError`, `TurnError`) live next to
//! the code that raises them. Every one of them implements [`GameError`] so the
//! runtime can classify failures uniformly when logging.
//!
//! Blocked moves, dead characters and turns on a finished game are normal
//! outcomes, not errors; nothing in this crate raises for them.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that was rejected before any mutation.
    ///
    /// Examples: malformed movement vector, out-of-bounds lookup
    Validation,

    /// Unexpected state inconsistency. Indicates a bug in setup or AI.
    ///
    /// Examples: occupancy desync, character standing on a wall
    Internal,

    /// State invariant violated after a turn; the session cannot continue safely.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and for matching in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
