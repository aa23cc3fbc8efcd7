//! Deterministic rules for the dungeon turn engine.
//!
//! `game-core` defines the canonical data (grid map, characters, game state)
//! and the turn-resolution engine. It performs no I/O and keeps no global
//! state: callers own a [`GameState`] and mutate it exclusively through
//! [`engine::GameEngine`]. The runtime crate wraps this in a session that
//! publishes change notifications.
pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod state;

pub use ai::{ChasePolicy, EnemyIntent, EnemyPolicy, IdlePolicy, PolicyContext};
pub use config::GameConfig;
pub use engine::{GameEngine, TurnError, TurnEvent, TurnOutcome, TurnReport};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Cell, CellKind, Character, CharacterId, CharacterKind, CharacterSpec, CharacterStats,
    CardinalDirection, EnemyKind, GameState, GridMap, MapDimensions, MapError, MovementVector,
    Outcome, Position, StateError,
};
