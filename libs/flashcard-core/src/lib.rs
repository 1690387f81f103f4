//! Core flashcard library: deck state and study traversal.
//!
//! Provides:
//! - Deck store with monotonic card ids
//! - Browse cursor with wraparound navigation
//! - Shuffled study sessions
//! - Versioned snapshot persistence over a key-value store
//! - `StudyDeck`, the controller tying these together

pub mod controller;
pub mod cursor;
pub mod error;
pub mod persistence;
pub mod store;
pub mod study;
pub mod types;

pub use controller::StudyDeck;
pub use cursor::BrowseCursor;
pub use error::{DeckError, Field, Result, StorageError};
pub use persistence::{KeyValueStore, MemoryKeyValueStore, Persistence, DEFAULT_STORAGE_KEY};
pub use store::{DeckStore, IdGenerator};
pub use study::StudySession;
pub use types::{Card, CardId, DeckSnapshot, Face, StudyProgress, View, SNAPSHOT_VERSION};
