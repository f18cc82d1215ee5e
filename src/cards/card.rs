//! The flashcard value.
//!
//! A `Card` is one vocabulary entry: the word shown face-up plus the answer
//! panel (countability badge, optional example sentence, optional tip). Cards
//! are immutable values - once constructed nothing mutates them, and a deck
//! reorders or replaces whole cards rather than editing them.
//!
//! Cards have no id. Identity is positional in whichever sequence currently
//! holds the card, and duplicate words are permitted.

use serde::{Deserialize, Serialize};

use super::countability::Countability;

/// One vocabulary flashcard.
///
/// ## Example
///
/// ```
/// use flashdeck::cards::{Card, Countability};
///
/// let card = Card::new("water", Countability::Uncountable)
///     .with_example("Could I have some water?")
///     .with_tip("Use \"some\", not \"a\".");
///
/// assert_eq!(card.word, "water");
/// assert!(card.tip.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The word shown face-up. Non-empty.
    pub word: String,

    /// Countability category shown on the answer badge.
    #[serde(default)]
    pub countability: Countability,

    /// Usage example for the answer panel. Absent means no example panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    /// Auxiliary note shown under the example. Absent means no tip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Card {
    /// Create a card with no example or tip.
    #[must_use]
    pub fn new(word: impl Into<String>, countability: Countability) -> Self {
        Self {
            word: word.into(),
            countability,
            example: None,
            tip: None,
        }
    }

    /// Attach an example sentence (builder pattern).
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Attach a tip (builder pattern).
    #[must_use]
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }
}
