pub mod character;
pub mod common;
pub mod map;

// Re-export common types
pub use common::{CardinalDirection, CharacterId, MovementVector, Position};

// Re-export character model
pub use character::{Character, CharacterKind, CharacterSpec, CharacterStats, EnemyKind};

// Re-export grid types
pub use map::{Cell, CellKind, GridMap, MapDimensions};
