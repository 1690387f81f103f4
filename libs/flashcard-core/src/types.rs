//! Core types for flashcard application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Opaque card identifier, serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(i64);

impl CardId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub front: String,
    pub back: String,
}

/// Which side of the displayed card is facing the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Front,
    Back,
}

impl Default for Face {
    fn default() -> Self {
        Self::Front
    }
}

impl Face {
    /// The opposite face.
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Versioned, serializable copy of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub version: u32,
    pub cards: Vec<Card>,
}

impl DeckSnapshot {
    /// Snapshot of the given cards at the current format version.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            cards,
        }
    }

    /// Snapshot used when nothing valid is stored: a single seed card.
    pub fn seed() -> Self {
        Self::new(vec![Card {
            id: CardId::new(1),
            front: "What is a variable?".to_string(),
            back: "A container that stores a value.".to_string(),
        }])
    }
}

impl Default for DeckSnapshot {
    fn default() -> Self {
        Self::seed()
    }
}

/// Position within an active study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyProgress {
    pub index: usize,
    pub total: usize,
}

/// Read-only view handed to the presentation layer after every intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub displayed_card: Option<Card>,
    pub displayed_face: Face,
    pub is_study_active: bool,
    pub list_snapshot: Vec<Card>,
    pub browse_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_progress: Option<StudyProgress>,
}
