//! Error types for replacement-dataset validation.
//!
//! The startup load path never fails (a missing or malformed document yields
//! an empty repository), so these errors only arise when the user supplies a
//! replacement dataset. Every variant carries a human-readable reason the
//! view layer can surface verbatim, and every failure leaves the session
//! state untouched.

use thiserror::Error;

/// Validation failure for a replacement dataset.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The input was not parsable as a JSON list of card records.
    #[error("replacement dataset is not a list of cards: {reason}")]
    MalformedDocument {
        /// Parser message describing what went wrong.
        reason: String,
    },

    /// The input parsed but contained no cards.
    #[error("replacement dataset contains no cards")]
    EmptyReplacement,

    /// A record in the list is not a usable card.
    #[error("card {index} is invalid: {reason}")]
    InvalidCard {
        /// Zero-based position of the offending record.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Convenience alias for fallible deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_readable() {
        let err = DeckError::MalformedDocument {
            reason: "expected a sequence".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "replacement dataset is not a list of cards: expected a sequence"
        );

        assert_eq!(
            DeckError::EmptyReplacement.to_string(),
            "replacement dataset contains no cards"
        );

        let err = DeckError::InvalidCard {
            index: 3,
            reason: "missing word".to_string(),
        };
        assert_eq!(err.to_string(), "card 3 is invalid: missing word");
    }
}
