//! Application state.

use crate::commands::CommandError;
use crate::db::SqliteKeyValueStore;
use flashcard_core::{Persistence, StudyDeck};
use std::sync::{Mutex, MutexGuard};

/// Deck controller backed by SQLite.
pub type Deck = StudyDeck<SqliteKeyValueStore>;

/// Global application state.
pub struct AppState {
    deck: Mutex<Deck>,
}

impl AppState {
    pub fn new(persistence: Persistence<SqliteKeyValueStore>) -> Self {
        Self::from_deck(StudyDeck::open(persistence))
    }

    pub fn from_deck(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Exclusive access to the deck for one intent.
    pub fn deck(&self) -> Result<MutexGuard<'_, Deck>, CommandError> {
        self.deck
            .lock()
            .map_err(|_| CommandError::internal("deck lock poisoned"))
    }
}
