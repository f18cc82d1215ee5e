//! Deck state and the controller that operates on it.
//!
//! ## Key Types
//!
//! - [`DeckState`]: the working deck, display position, and reveal flag
//! - [`DeckController`]: owns the pristine repository and applies every
//!   study operation to a state

pub mod controller;
pub mod state;

pub use controller::DeckController;
pub use state::DeckState;
