//! Card repository: the pristine, ordered card set.
//!
//! The `Repository` is parsed once from the external document and never
//! mutated afterwards. Every filter derives from it - never from the
//! currently filtered or shuffled deck - so filters cannot compound.
//! Replacing the dataset swaps in a whole new `Repository`; it does not edit
//! this one.
//!
//! Backed by `im::Vector`, so seeding a working deck from the repository is
//! an O(1) structural share rather than a deep copy.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::countability::{CategorySet, Countability};

/// Immutable ordered sequence of cards.
///
/// ## Example
///
/// ```
/// use flashdeck::cards::{Card, CategorySet, Countability, Repository};
///
/// let repo = Repository::from_cards(vec![
///     Card::new("water", Countability::Uncountable),
///     Card::new("book", Countability::Countable),
/// ]);
///
/// assert_eq!(repo.len(), 2);
///
/// let countable = repo.cards_in_categories(CategorySet::single(Countability::Countable));
/// assert_eq!(countable.len(), 1);
/// assert_eq!(countable[0].word, "book");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    cards: Vector<Card>,
}

impl Repository {
    /// Create an empty repository ("no cards available").
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository from cards, preserving their order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the repository holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate over all cards in repository order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The backing card sequence.
    ///
    /// Cloning it is O(1), which is how a working deck gets seeded.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// The order-preserving subsequence whose countability is in `categories`.
    ///
    /// This is the filter source: selecting with `CategorySet::all()` returns
    /// the repository's exact contents and order, and an empty selection
    /// returns an empty sequence.
    #[must_use]
    pub fn cards_in_categories(&self, categories: CategorySet) -> Vector<Card> {
        self.cards
            .iter()
            .filter(|card| categories.contains(card.countability))
            .cloned()
            .collect()
    }

    /// Per-category card tallies, for the view's filter chrome.
    ///
    /// Categories with no cards are absent from the map.
    #[must_use]
    pub fn category_counts(&self) -> FxHashMap<Countability, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.countability).or_insert(0) += 1;
        }
        counts
    }
}
