//! Countability categories and category sets.
//!
//! Every card carries one of four categories: `countable`, `uncountable`,
//! `both`, or `unknown` for anything the document left out or misspelled.
//! Parsing is total - input is trimmed and matched case-insensitively, and
//! unrecognized text falls back to `Unknown` instead of failing.
//!
//! `CategorySet` is the selection a filter operates on: a small bitmask over
//! the four categories.

use serde::{Deserialize, Deserializer, Serialize};

/// Countability category of a noun.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Countability {
    /// Takes a plural and the indefinite article ("a book").
    Countable,
    /// Mass noun ("water").
    Uncountable,
    /// Usable either way depending on sense ("hair").
    Both,
    /// Absent or unrecognized in the source document.
    #[default]
    Unknown,
}

impl Countability {
    /// All categories, in declaration order.
    pub const ALL: [Countability; 4] = [
        Countability::Countable,
        Countability::Uncountable,
        Countability::Both,
        Countability::Unknown,
    ];

    /// Parse a category from document text.
    ///
    /// Total: trims, matches case-insensitively, and maps anything
    /// unrecognized to `Unknown`.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "countable" => Countability::Countable,
            "uncountable" => Countability::Uncountable,
            "both" => Countability::Both,
            _ => Countability::Unknown,
        }
    }

    /// The lowercase badge text for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Countability::Countable => "countable",
            Countability::Uncountable => "uncountable",
            Countability::Both => "both",
            Countability::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Countability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Countability {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

// Deserialization routes through `parse` so an unrecognized category string
// never fails the document - it becomes `Unknown`, exactly like an absent
// field.
impl<'de> Deserialize<'de> for Countability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Countability::parse(&text))
    }
}

/// A set of countability categories, used for filter selections.
///
/// Represented as a bitmask over the four categories, so copying and
/// membership tests are trivial.
///
/// ## Example
///
/// ```
/// use flashdeck::cards::{CategorySet, Countability};
///
/// let set = CategorySet::empty()
///     .with(Countability::Countable)
///     .with(Countability::Both);
///
/// assert!(set.contains(Countability::Countable));
/// assert!(!set.contains(Countability::Uncountable));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    const fn bit(category: Countability) -> u8 {
        1 << category as u8
    }

    /// The empty selection.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every category, `Unknown` included.
    ///
    /// Filtering with this set always restores the full repository.
    #[must_use]
    pub const fn all() -> Self {
        Self(
            Self::bit(Countability::Countable)
                | Self::bit(Countability::Uncountable)
                | Self::bit(Countability::Both)
                | Self::bit(Countability::Unknown),
        )
    }

    /// A single-category selection.
    #[must_use]
    pub const fn single(category: Countability) -> Self {
        Self(Self::bit(category))
    }

    /// Build a selection from a slice of categories.
    #[must_use]
    pub fn of(categories: &[Countability]) -> Self {
        categories.iter().copied().collect()
    }

    /// Add a category (builder pattern).
    #[must_use]
    pub const fn with(self, category: Countability) -> Self {
        Self(self.0 | Self::bit(category))
    }

    /// Check whether a category is selected.
    #[must_use]
    pub const fn contains(self, category: Countability) -> bool {
        self.0 & Self::bit(category) != 0
    }

    /// Add a category in place.
    pub fn insert(&mut self, category: Countability) {
        self.0 |= Self::bit(category);
    }

    /// Remove a category in place.
    pub fn remove(&mut self, category: Countability) {
        self.0 &= !Self::bit(category);
    }

    /// Number of selected categories.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if no category is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the selected categories in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Countability> {
        Countability::ALL
            .into_iter()
            .filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Countability> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Countability>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl std::fmt::Display for CategorySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, category) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{category}")?;
        }
        write!(f, "}}")
    }
}
