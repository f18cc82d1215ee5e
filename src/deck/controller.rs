//! Deck controller: every operation a study session can perform.
//!
//! The controller owns the pristine [`Repository`] and the shuffle RNG; the
//! [`DeckState`] it operates on is plain data the caller holds. That split
//! keeps the rules in one place while states stay cheap to clone, snapshot,
//! or serialize.
//!
//! ## Operations
//!
//! - Navigation: [`advance`](DeckController::advance),
//!   [`retreat`](DeckController::retreat),
//!   [`jump_to`](DeckController::jump_to) - cyclic, never out of bounds
//! - Details: [`toggle_reveal`](DeckController::toggle_reveal)
//! - Reordering: [`shuffle`](DeckController::shuffle)
//! - Selection: [`filter`](DeckController::filter) - always derived from the
//!   pristine repository, never from the current working deck
//! - Data: [`replace_deck`](DeckController::replace_deck) - validates first,
//!   and on rejection leaves both repository and state untouched
//!
//! On an empty deck every operation is a no-op, never an error.

use crate::cards::{Card, CategorySet, Repository};
use crate::core::error::{DeckError, Result};
use crate::core::rng::DeckRng;

use super::state::DeckState;

/// Applies study operations to deck states.
///
/// ## Example
///
/// ```
/// use flashdeck::cards::{Card, Countability, Repository};
/// use flashdeck::deck::DeckController;
///
/// let repo = Repository::from_cards(vec![
///     Card::new("water", Countability::Uncountable),
///     Card::new("book", Countability::Countable),
/// ]);
///
/// let controller = DeckController::new(repo);
/// let mut state = controller.initial_state();
///
/// controller.advance(&mut state);
/// assert_eq!(state.current_card().unwrap().word, "book");
///
/// controller.advance(&mut state);
/// assert_eq!(state.current_card().unwrap().word, "water"); // wrapped
/// ```
#[derive(Clone, Debug)]
pub struct DeckController {
    /// The pristine card set filters derive from.
    repository: Repository,

    /// Shuffle randomness.
    rng: DeckRng,
}

impl DeckController {
    /// Create a controller over `repository` with entropy-seeded shuffles.
    #[must_use]
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            rng: DeckRng::new(),
        }
    }

    /// Create a controller whose shuffles are reproducible from `seed`.
    #[must_use]
    pub fn with_seed(repository: Repository, seed: u64) -> Self {
        Self {
            repository,
            rng: DeckRng::seeded(seed),
        }
    }

    /// The pristine repository.
    #[must_use]
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// A fresh state studying the full repository from the top.
    #[must_use]
    pub fn initial_state(&self) -> DeckState {
        DeckState::from_cards(self.repository.cards().clone())
    }

    // === Navigation ===

    /// Show the next card, wrapping from the last card to the first.
    ///
    /// Hides the new card's details. No-op on an empty deck.
    pub fn advance(&self, state: &mut DeckState) {
        state.step_forward();
        log::trace!("Advanced to position {}", state.position());
    }

    /// Show the previous card, wrapping from the first card to the last.
    ///
    /// Hides the new card's details. No-op on an empty deck.
    pub fn retreat(&self, state: &mut DeckState) {
        state.step_back();
        log::trace!("Retreated to position {}", state.position());
    }

    /// Jump straight to a position, wrapping out-of-range indices.
    ///
    /// Hides the new card's details. No-op on an empty deck.
    pub fn jump_to(&self, state: &mut DeckState, index: usize) {
        state.jump(index);
        log::trace!("Jumped to position {}", state.position());
    }

    /// Show or hide the displayed card's details.
    ///
    /// No-op on an empty deck.
    pub fn toggle_reveal(&self, state: &mut DeckState) {
        state.toggle_revealed();
    }

    // === Deck Shape ===

    /// Reorder the working deck uniformly at random.
    ///
    /// Keeps exactly the current cards (a permutation, not a re-filter),
    /// then restarts from the top with details hidden. No-op on an empty
    /// deck; a one-card deck still restarts and hides details.
    pub fn shuffle(&mut self, state: &mut DeckState) {
        if state.is_empty() {
            return;
        }
        let mut cards: Vec<Card> = state.iter().cloned().collect();
        self.rng.shuffle(&mut cards);
        state.set_working(cards.into_iter().collect());
        log::debug!("Shuffled {} card(s)", state.len());
    }

    /// Rebuild the working deck from the repository cards in `categories`.
    ///
    /// Always derives from the pristine repository, so filtering after a
    /// shuffle or a narrower filter starts over; it never compounds. The
    /// result keeps repository order and restarts from the top with details
    /// hidden. An empty selection yields an empty working deck.
    pub fn filter(&self, state: &mut DeckState, categories: CategorySet) {
        let selected = self.repository.cards_in_categories(categories);
        log::debug!(
            "Filter {categories} selected {} of {} card(s)",
            selected.len(),
            self.repository.len()
        );
        state.set_working(selected);
    }

    /// Swap in a whole new card set.
    ///
    /// The cards are validated first: there must be at least one, and every
    /// card must name a non-blank word. On rejection the repository and
    /// `state` are left exactly as they were. On success the new cards
    /// become the pristine repository (later filters derive from them) and
    /// the working deck restarts from the top of the new set.
    pub fn replace_deck(&mut self, state: &mut DeckState, cards: Vec<Card>) -> Result<()> {
        if cards.is_empty() {
            return Err(DeckError::EmptyReplacement);
        }
        if let Some(index) = cards.iter().position(|card| card.word.trim().is_empty()) {
            return Err(DeckError::InvalidCard {
                index,
                reason: "missing or blank word".to_string(),
            });
        }

        self.repository = Repository::from_cards(cards);
        state.set_working(self.repository.cards().clone());
        log::debug!("Replaced deck with {} card(s)", self.repository.len());
        Ok(())
    }
}
