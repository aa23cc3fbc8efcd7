//! Observer notification channel.
//!
//! Listeners are told *that* the session changed, not *what* changed; they
//! re-read the session accessors when called.

mod bus;

pub use bus::{ChangeNotifier, SubscriptionId};
