//! Core building blocks: errors and RNG.
//!
//! These are the pieces every other module leans on and none of them knows
//! anything about cards or decks specifically.

pub mod error;
pub mod rng;

pub use error::{DeckError, Result};
pub use rng::DeckRng;
