//! State management errors.
//!
//! Errors related to grid access, session setup and the occupancy invariants.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, Position};

/// Errors raised by [`GridMap`](crate::state::GridMap) lookups and occupancy updates.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    /// Coordinate lies outside the grid.
    #[error("position {position} is out of bounds (map size: {rows}x{cols})")]
    OutOfBounds {
        position: Position,
        rows: u32,
        cols: u32,
    },

    /// Tried to place a character on a wall.
    #[error("position {position} is a wall")]
    Wall { position: Position },

    /// Cell already holds a different character.
    #[error("position {position} is already occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: CharacterId,
    },

    /// Tried to clear a character from a cell it does not hold.
    #[error("{character} does not occupy {position}")]
    NotOccupant {
        position: Position,
        character: CharacterId,
    },

    /// Map rows of different lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MapError::OutOfBounds { .. } | MapError::RaggedRow { .. } => {
                ErrorSeverity::Validation
            }
            MapError::Wall { .. } | MapError::Occupied { .. } | MapError::NotOccupant { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MapError::OutOfBounds { .. } => "MAP_OUT_OF_BOUNDS",
            MapError::Wall { .. } => "MAP_WALL",
            MapError::Occupied { .. } => "MAP_OCCUPIED",
            MapError::NotOccupant { .. } => "MAP_NOT_OCCUPANT",
            MapError::RaggedRow { .. } => "MAP_RAGGED_ROW",
        }
    }
}

/// Errors that occur while building a game state or checking its invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Roster has no hero.
    #[error("roster has no hero")]
    MissingHero,

    /// Roster has more than one hero.
    #[error("roster has {count} heroes, expected exactly one")]
    MultipleHeroes { count: usize },

    /// A character could not be placed on the map.
    #[error("cannot place {character} at {position}: {source}")]
    Placement {
        character: CharacterId,
        position: Position,
        #[source]
        source: MapError,
    },

    /// A wall cell references an occupant.
    #[error("wall at {position} is occupied by {occupant}")]
    OccupiedWall {
        position: Position,
        occupant: CharacterId,
    },

    /// A cell references a character that is unknown, dead, or elsewhere.
    #[error("cell {position} references {occupant}, which is not standing there")]
    StaleOccupant {
        position: Position,
        occupant: CharacterId,
    },

    /// A living character is not referenced by the cell at its position.
    #[error("{character} at {position} is missing from the map")]
    MissingOccupant {
        character: CharacterId,
        position: Position,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            // Setup problems: bad content, rejected before a session exists
            MissingHero | MultipleHeroes { .. } | Placement { .. } => ErrorSeverity::Validation,

            // Occupancy desync: the engine broke its own bookkeeping
            OccupiedWall { .. } | StaleOccupant { .. } | MissingOccupant { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            MissingHero => "STATE_MISSING_HERO",
            MultipleHeroes { .. } => "STATE_MULTIPLE_HEROES",
            Placement { .. } => "STATE_PLACEMENT",
            OccupiedWall { .. } => "STATE_OCCUPIED_WALL",
            StaleOccupant { .. } => "STATE_STALE_OCCUPANT",
            MissingOccupant { .. } => "STATE_MISSING_OCCUPANT",
        }
    }
}
