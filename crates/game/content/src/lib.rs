//! Data-driven content definitions and loaders.
//!
//! This crate turns RON/TOML data files into the inputs `game-core` needs to
//! start a session:
//! - Map layouts (RON, one string per row)
//! - Character rosters (RON list of `CharacterSpec`)
//! - Game configuration (TOML)
//!
//! A built-in scenario ships with the crate so a session can start without a
//! content directory.

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, MapLoader, RosterLoader, Scenario};
