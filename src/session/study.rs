//! A ready-to-use study session.
//!
//! [`StudySession`] bundles a [`DeckController`] with the [`DeckState`] it
//! operates on, for callers that want one value to hold and poke. Views
//! that snapshot or persist state separately can use the controller and
//! state directly instead.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::cards::{Card, CategorySet, Countability, Repository};
use crate::core::error::Result;
use crate::deck::{DeckController, DeckState};
use crate::document;

/// A controller and its state, studied as one unit.
///
/// ## Example
///
/// ```
/// use flashdeck::session::StudySession;
///
/// let mut session = StudySession::from_document_str(
///     r#"{ "countabilityCards": [
///         { "word": "water", "countability": "uncountable" },
///         { "word": "book", "countability": "countable" }
///     ] }"#,
/// );
///
/// assert_eq!(session.len(), 2);
/// assert_eq!(session.current_card().unwrap().word, "water");
///
/// session.toggle_reveal();
/// assert!(session.revealed());
///
/// session.advance();
/// assert_eq!(session.current_card().unwrap().word, "book");
/// assert!(!session.revealed());
/// ```
#[derive(Clone, Debug)]
pub struct StudySession {
    controller: DeckController,
    state: DeckState,
}

impl StudySession {
    /// Start a session over `repository` with entropy-seeded shuffles.
    #[must_use]
    pub fn new(repository: Repository) -> Self {
        let controller = DeckController::new(repository);
        let state = controller.initial_state();
        Self { controller, state }
    }

    /// Start a session whose shuffles are reproducible from `seed`.
    #[must_use]
    pub fn with_seed(repository: Repository, seed: u64) -> Self {
        let controller = DeckController::with_seed(repository, seed);
        let state = controller.initial_state();
        Self { controller, state }
    }

    /// Start a session from the card document at `path`, leniently.
    ///
    /// An unreadable or malformed document yields an empty session, never
    /// an error.
    #[must_use]
    pub fn from_document_path(path: impl AsRef<Path>) -> Self {
        Self::new(document::load_repository(path))
    }

    /// Start a session from card document text, leniently.
    #[must_use]
    pub fn from_document_str(text: &str) -> Self {
        Self::new(document::parse_repository(text))
    }

    // === Operations ===

    /// Show the next card, wrapping at the end.
    pub fn advance(&mut self) {
        self.controller.advance(&mut self.state);
    }

    /// Show the previous card, wrapping at the start.
    pub fn retreat(&mut self) {
        self.controller.retreat(&mut self.state);
    }

    /// Jump straight to a position, wrapping out-of-range indices.
    pub fn jump_to(&mut self, index: usize) {
        self.controller.jump_to(&mut self.state, index);
    }

    /// Show or hide the displayed card's details.
    pub fn toggle_reveal(&mut self) {
        self.controller.toggle_reveal(&mut self.state);
    }

    /// Reorder the working deck uniformly at random.
    pub fn shuffle(&mut self) {
        self.controller.shuffle(&mut self.state);
    }

    /// Rebuild the working deck from the repository cards in `categories`.
    pub fn filter(&mut self, categories: CategorySet) {
        self.controller.filter(&mut self.state, categories);
    }

    /// Swap in a whole new card set, validating it first.
    ///
    /// On rejection the session is left exactly as it was.
    pub fn replace_deck(&mut self, cards: Vec<Card>) -> Result<()> {
        self.controller.replace_deck(&mut self.state, cards)
    }

    /// Parse `text` as a replacement dataset and swap it in.
    ///
    /// The text must be a JSON list of card records. On any parse or
    /// validation failure the session is left exactly as it was.
    pub fn replace_from_json(&mut self, text: &str) -> Result<()> {
        let cards = document::parse_replacement(text)?;
        self.replace_deck(cards)
    }

    // === Reads ===

    /// The card on display, or `None` when the deck is empty.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.state.current_card()
    }

    /// Position of the card on display.
    #[must_use]
    pub fn position(&self) -> usize {
        self.state.position()
    }

    /// Number of cards in the working deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Check if the working deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Whether the displayed card's details are shown.
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.state.revealed()
    }

    /// Per-category card tallies of the pristine repository.
    #[must_use]
    pub fn category_counts(&self) -> FxHashMap<Countability, usize> {
        self.controller.repository().category_counts()
    }

    /// The pristine repository.
    #[must_use]
    pub fn repository(&self) -> &Repository {
        self.controller.repository()
    }

    /// The session's deck state.
    #[must_use]
    pub fn state(&self) -> &DeckState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DeckError;

    const DOCUMENT: &str = r#"{
        "countabilityCards": [
            { "word": "water", "countability": "uncountable" },
            { "word": "book", "countability": "countable" },
            { "word": "hair", "countability": "both" }
        ]
    }"#;

    #[test]
    fn test_session_from_document_str() {
        let session = StudySession::from_document_str(DOCUMENT);

        assert_eq!(session.len(), 3);
        assert_eq!(session.position(), 0);
        assert!(!session.revealed());
        assert_eq!(session.current_card().unwrap().word, "water");
    }

    #[test]
    fn test_session_from_malformed_document_is_empty() {
        let session = StudySession::from_document_str("not json");

        assert!(session.is_empty());
        assert!(session.current_card().is_none());
    }

    #[test]
    fn test_session_navigation_and_reveal() {
        let mut session = StudySession::from_document_str(DOCUMENT);

        session.toggle_reveal();
        assert!(session.revealed());

        session.advance();
        assert_eq!(session.current_card().unwrap().word, "book");
        assert!(!session.revealed());

        session.retreat();
        session.retreat();
        assert_eq!(session.current_card().unwrap().word, "hair"); // Wrapped

        session.jump_to(4);
        assert_eq!(session.position(), 1); // 4 % 3
    }

    #[test]
    fn test_session_filter_and_counts() {
        let mut session = StudySession::from_document_str(DOCUMENT);

        let counts = session.category_counts();
        assert_eq!(counts.get(&Countability::Countable), Some(&1));

        session.filter(CategorySet::single(Countability::Uncountable));
        assert_eq!(session.len(), 1);
        assert_eq!(session.current_card().unwrap().word, "water");

        // Counts describe the repository, not the filtered deck.
        assert_eq!(session.category_counts().len(), 3);
    }

    #[test]
    fn test_session_replace_from_json() {
        let mut session = StudySession::from_document_str(DOCUMENT);

        session
            .replace_from_json(r#"[ { "word": "luggage", "countability": "uncountable" } ]"#)
            .unwrap();

        assert_eq!(session.len(), 1);
        assert_eq!(session.repository().len(), 1);
        assert_eq!(session.current_card().unwrap().word, "luggage");
    }

    #[test]
    fn test_session_rejected_replacement_changes_nothing() {
        let mut session = StudySession::from_document_str(DOCUMENT);
        session.advance();
        session.toggle_reveal();
        let before = session.state().clone();

        let result = session.replace_from_json("[]");
        assert!(matches!(result, Err(DeckError::EmptyReplacement)));
        assert_eq!(session.state(), &before);
        assert_eq!(session.repository().len(), 3);

        let result = session.replace_from_json("{ not json");
        assert!(matches!(result, Err(DeckError::MalformedDocument { .. })));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_session_seeded_shuffle_is_reproducible() {
        let repo = document::parse_repository(DOCUMENT);
        let mut a = StudySession::with_seed(repo.clone(), 11);
        let mut b = StudySession::with_seed(repo, 11);

        a.shuffle();
        b.shuffle();

        assert_eq!(a.state(), b.state());
    }
}
