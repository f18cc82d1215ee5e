//! Card data model: words, countability categories, and the repository.
//!
//! ## Key Types
//!
//! - [`Card`]: one vocabulary entry (word, countability, optional example
//!   and usage tip)
//! - [`Countability`]: the grammatical category of a word
//! - [`CategorySet`]: a set of categories, used to filter the deck
//! - [`Repository`]: the pristine, ordered card collection every filter
//!   derives from

pub mod card;
pub mod countability;
pub mod repository;

pub use card::Card;
pub use countability::{CategorySet, Countability};
pub use repository::Repository;
