//! Snapshot persistence over a string key-value store.
//!
//! # Format
//! ```json
//! { "version": 1, "cards": [{ "id": 1, "front": "Q", "back": "A" }] }
//! ```
//!
//! Anything that cannot be read back as a current-version snapshot with
//! valid cards degrades to [`DeckSnapshot::seed`].

use crate::error::StorageError;
use crate::types::{DeckSnapshot, SNAPSHOT_VERSION};
use std::collections::{HashMap, HashSet};

/// Default key the snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "flashcards_app_state";

type Result<T> = std::result::Result<T, StorageError>;

/// Minimal string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves deck snapshots through a [`KeyValueStore`].
#[derive(Debug)]
pub struct Persistence<K> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> Persistence<K> {
    pub fn new(store: K) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    /// Stored snapshot, or the seed snapshot if none is usable.
    pub fn load(&self) -> DeckSnapshot {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored snapshot, using seed deck");
                return DeckSnapshot::seed();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read snapshot");
                return DeckSnapshot::seed();
            }
        };

        match decode(&raw) {
            Some(snapshot) => snapshot,
            None => {
                tracing::warn!(key = %self.key, "discarding unusable snapshot");
                DeckSnapshot::seed()
            }
        }
    }

    pub fn save(&mut self, snapshot: &DeckSnapshot) -> Result<()> {
        let raw = serde_json::to_string(snapshot)?;
        self.store.set(&self.key, &raw)
    }
}

/// Parse a stored payload, rejecting wrong versions and invalid cards.
pub fn decode(raw: &str) -> Option<DeckSnapshot> {
    let snapshot: DeckSnapshot = serde_json::from_str(raw).ok()?;
    if snapshot.version != SNAPSHOT_VERSION {
        return None;
    }

    let mut seen_ids = HashSet::new();
    for card in &snapshot.cards {
        if card.front.trim().is_empty() || card.back.trim().is_empty() {
            return None;
        }
        if !seen_ids.insert(card.id) {
            return None;
        }
    }
    Some(snapshot)
}
