//! Turning JSON documents into card repositories.
//!
//! Two parsing postures, matching two situations:
//!
//! - Startup loading ([`load_repository`], [`parse_repository`]) is lenient.
//!   A missing file, malformed JSON, or a record without a word must never
//!   keep the viewer from starting, so problems are logged and the result
//!   degrades to fewer (or zero) cards.
//! - Replacement parsing ([`parse_replacement`]) is strict. A dataset the
//!   user explicitly supplies is validated and rejected with a reason, so a
//!   mistake surfaces instead of silently emptying the deck.
//!
//! The document is a JSON object whose card list lives under the
//! `countabilityCards` key:
//!
//! ```json
//! {
//!   "countabilityCards": [
//!     { "word": "water", "countability": "uncountable", "example": "I drank some water." }
//!   ]
//! }
//! ```
//!
//! A replacement dataset is the bare list, without the wrapping object.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cards::{Card, Countability, Repository};
use crate::core::error::{DeckError, Result};

/// One record as it appears in the document. Every field is optional at this
/// stage; [`RawCard::normalize`] decides what survives.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCard {
    word: Option<String>,
    countability: Option<String>,
    example: Option<String>,
    tip: Option<String>,
}

impl RawCard {
    /// Turn a raw record into a card, if it names a word.
    ///
    /// Whitespace around the word is trimmed, a blank example or tip is
    /// treated as absent, and an unrecognized countability string becomes
    /// [`Countability::Unknown`].
    fn normalize(self) -> Option<Card> {
        let word = self
            .word
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())?;
        let countability = self
            .countability
            .as_deref()
            .map(Countability::parse)
            .unwrap_or_default();

        let mut card = Card::new(word, countability);
        if let Some(example) = self.example.filter(|text| !text.trim().is_empty()) {
            card = card.with_example(example);
        }
        if let Some(tip) = self.tip.filter(|text| !text.trim().is_empty()) {
            card = card.with_tip(tip);
        }
        Some(card)
    }
}

/// The top-level document shape. Records stay raw JSON values here so one
/// unreadable record cannot take the rest of the document down with it.
#[derive(Debug, Default, Deserialize)]
struct CardDocument {
    #[serde(rename = "countabilityCards", default)]
    cards: Vec<serde_json::Value>,
}

/// Read and parse the card document at `path`, leniently.
///
/// An unreadable file yields an empty repository and a warning, never an
/// error. The viewer still starts; it just has no cards to show.
#[must_use]
pub fn load_repository(path: impl AsRef<Path>) -> Repository {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => parse_repository(&text),
        Err(e) => {
            log::warn!(
                "Could not read card document {}: {e}. Starting with an empty deck",
                path.display()
            );
            Repository::new()
        }
    }
}

/// Parse card document text, leniently.
///
/// Malformed JSON or a missing `countabilityCards` list yields an empty
/// repository; unreadable records and records without a word are skipped,
/// leaving the rest in document order. Everything skipped is logged.
#[must_use]
pub fn parse_repository(text: &str) -> Repository {
    let document: CardDocument = match serde_json::from_str(text) {
        Ok(document) => document,
        Err(e) => {
            log::warn!("Card document is malformed: {e}. Starting with an empty deck");
            return Repository::new();
        }
    };

    let total = document.cards.len();
    let mut cards = Vec::with_capacity(total);
    for value in document.cards {
        match serde_json::from_value::<RawCard>(value) {
            Ok(record) => {
                if let Some(card) = record.normalize() {
                    cards.push(card);
                }
            }
            Err(e) => log::debug!("Unreadable card record: {e}"),
        }
    }

    let skipped = total - cards.len();
    if skipped > 0 {
        log::warn!("Skipped {skipped} of {total} card record(s) (unreadable or missing a word)");
    }
    log::debug!("Parsed {} card(s) from document", cards.len());

    Repository::from_cards(cards)
}

/// Parse a replacement dataset, strictly.
///
/// The text must be a JSON list of card records, it must contain at least
/// one record, and every record must be readable and name a non-blank word.
/// The first violation is reported and nothing is returned, so the caller's
/// deck can stay exactly as it was.
pub fn parse_replacement(text: &str) -> Result<Vec<Card>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|e| DeckError::MalformedDocument {
            reason: e.to_string(),
        })?;

    if records.is_empty() {
        return Err(DeckError::EmptyReplacement);
    }

    let mut cards = Vec::with_capacity(records.len());
    for (index, value) in records.into_iter().enumerate() {
        let record: RawCard =
            serde_json::from_value(value).map_err(|e| DeckError::InvalidCard {
                index,
                reason: e.to_string(),
            })?;
        match record.normalize() {
            Some(card) => cards.push(card),
            None => {
                return Err(DeckError::InvalidCard {
                    index,
                    reason: "missing or blank word".to_string(),
                })
            }
        }
    }
    Ok(cards)
}
