//! # flashdeck
//!
//! A deck-state engine for countable/uncountable vocabulary flashcards.
//!
//! ## Design Principles
//!
//! 1. **Separation of rules and state**: `DeckController` holds the pristine
//!    repository and applies every operation; `DeckState` is plain data the
//!    view holds, clones, and renders.
//!
//! 2. **Filters never compound**: every filter derives from the pristine
//!    repository, so narrowing and broadening the selection is always
//!    reversible.
//!
//! 3. **Empty is a state, not an error**: on an empty deck every operation
//!    is a no-op. Only an explicit deck replacement can be rejected.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the repository and working deck share
//!   structure via `im-rs`, so reseeding the deck is O(1).
//!
//! - **Lenient in, strict on demand**: startup document loading degrades to
//!   an empty deck with a logged warning; user-supplied replacement data is
//!   validated and rejected with a reason.
//!
//! ## Modules
//!
//! - `core`: Errors and the shuffle RNG
//! - `cards`: Card data model, countability categories, repository
//! - `document`: JSON document parsing and loading
//! - `deck`: Deck state and the controller that operates on it
//! - `session`: A facade bundling controller and state

pub mod cards;
pub mod core;
pub mod deck;
pub mod document;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DeckError, DeckRng, Result};

pub use crate::cards::{Card, CategorySet, Countability, Repository};

pub use crate::deck::{DeckController, DeckState};

pub use crate::document::{load_repository, parse_replacement, parse_repository};

pub use crate::session::StudySession;
