//! Session orchestration for the turn-based dungeon.
//!
//! This crate wraps the `game-core` engine into an explicitly constructed
//! [`GameSession`] that owns the state, the enemy policy and a synchronous
//! change notifier. Consumers drive it one movement vector at a time and
//! re-read the state when notified.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`events`] provides the observer notification channel
//! - [`config`] reads runtime settings from the environment
//! - [`error`] defines the runtime error surface
pub mod config;
pub mod error;
pub mod events;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{ChangeNotifier, SubscriptionId};
pub use session::{GameSession, SessionBuilder};
