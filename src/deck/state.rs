//! Deck state: one study session's mutable position.
//!
//! ## DeckState
//!
//! Everything the viewer needs to render one moment of study:
//! - The working deck (the filtered or shuffled sequence being studied)
//! - The position of the card on display
//! - Whether that card's details are revealed
//!
//! All mutation goes through [`DeckController`](crate::deck::DeckController).
//! The primitives here are crate-internal so every change re-establishes the
//! same invariants: the position stays in bounds and a new card always starts
//! with its details hidden.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The mutable state of a study session.
///
/// Uses an `im` persistent vector for the working deck, so seeding it from
/// the repository shares structure instead of copying every card.
///
/// ## Invariants
///
/// - `position` is in `[0, len)` while the deck is non-empty, and 0 while it
///   is empty
/// - any change to the working deck resets `position` to 0 and hides details
/// - navigation hides details
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckState {
    /// The card sequence currently being studied.
    working: Vector<Card>,

    /// Index of the card on display.
    position: usize,

    /// Whether the displayed card's details are shown.
    revealed: bool,
}

impl DeckState {
    /// Create an empty state (no cards, nothing to show).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state studying `working` from the top, details hidden.
    #[must_use]
    pub fn from_cards(working: Vector<Card>) -> Self {
        Self {
            working,
            position: 0,
            revealed: false,
        }
    }

    // === Reads ===

    /// Number of cards in the working deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Check if the working deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Position of the card on display.
    ///
    /// Views render this as `position + 1` of `len`.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the displayed card's details are shown.
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// The card on display, or `None` when the deck is empty.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.working.get(self.position)
    }

    /// Iterate over the working deck in study order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.working.iter()
    }

    /// The working deck itself.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.working
    }

    // === Mutation Primitives ===
    //
    // Crate-internal: the controller is the only caller, and every primitive
    // leaves the invariants intact. All of them are no-ops on an empty deck.

    /// Swap in a new working deck, back at the top with details hidden.
    pub(crate) fn set_working(&mut self, working: Vector<Card>) {
        self.working = working;
        self.position = 0;
        self.revealed = false;
    }

    /// Move one card forward, wrapping from the last card to the first.
    pub(crate) fn step_forward(&mut self) {
        if self.working.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.working.len();
        self.revealed = false;
    }

    /// Move one card back, wrapping from the first card to the last.
    pub(crate) fn step_back(&mut self) {
        if self.working.is_empty() {
            return;
        }
        let len = self.working.len();
        self.position = (self.position + len - 1) % len;
        self.revealed = false;
    }

    /// Jump to a position, wrapping out-of-range indices into bounds.
    pub(crate) fn jump(&mut self, index: usize) {
        if self.working.is_empty() {
            return;
        }
        self.position = index % self.working.len();
        self.revealed = false;
    }

    /// Flip the details between hidden and shown.
    pub(crate) fn toggle_revealed(&mut self) {
        if self.working.is_empty() {
            return;
        }
        self.revealed = !self.revealed;
    }
}
