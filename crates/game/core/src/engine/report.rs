//! What a turn did, for logging and presentation.

use crate::state::{CharacterId, Outcome, Position};

/// A single observable change produced while resolving a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    Moved {
        character: CharacterId,
        from: Position,
        to: Position,
    },
    /// The step target was off the grid, a wall, or taken.
    Blocked {
        character: CharacterId,
        target: Position,
    },
    Attacked {
        attacker: CharacterId,
        defender: CharacterId,
        damage: u32,
        remaining: u32,
    },
    /// Vitality reached zero; the character left its cell.
    Died {
        character: CharacterId,
        position: Position,
    },
}

/// Summary of a resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Level counter after the turn.
    pub level: u64,
    pub outcome: Outcome,
    pub events: Vec<TurnEvent>,
}

/// Result of [`GameEngine::advance_turn`](super::GameEngine::advance_turn).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// The turn ran to completion.
    Resolved(TurnReport),
    /// The session was already finished; nothing changed.
    Ignored(Outcome),
}

impl TurnOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, TurnOutcome::Resolved(_))
    }

    pub fn report(&self) -> Option<&TurnReport> {
        match self {
            TurnOutcome::Resolved(report) => Some(report),
            TurnOutcome::Ignored(_) => None,
        }
    }
}
