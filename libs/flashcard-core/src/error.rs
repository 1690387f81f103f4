//! Error types for flashcard-core.

use crate::types::CardId;
use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Card field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Front,
    Back,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Front => f.write_str("front"),
            Self::Back => f.write_str("back"),
        }
    }
}

/// Errors rejected by deck operations. No state changes when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("card {0} must not be empty")]
    Validation(Field),

    #[error("card not found: {0}")]
    NotFound(CardId),

    #[error("no card ids left to assign")]
    IdsExhausted,
}

/// Errors raised by a key-value backend or the snapshot codec.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_field() {
        assert_eq!(
            DeckError::Validation(Field::Back).to_string(),
            "card back must not be empty"
        );
    }

    #[test]
    fn not_found_message_includes_id() {
        assert_eq!(DeckError::NotFound(CardId::new(42)).to_string(), "card not found: 42");
    }
}
