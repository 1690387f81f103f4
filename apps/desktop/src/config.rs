//! Application configuration read from the environment.

use flashcard_core::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

/// Where the deck lives and how noisy logging is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file path; `None` keeps everything in memory.
    pub db_path: Option<PathBuf>,
    pub storage_key: String,
    pub log_filter: String,
}

impl AppConfig {
    /// Load `.env` if present, then read `FLASHCARDS_*` and `RUST_LOG`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("FLASHCARDS_DB_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);
        Self {
            db_path: Some(db_path),
            storage_key: lookup("FLASHCARDS_STORAGE_KEY")
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Configuration for tests: no file on disk.
    pub fn in_memory() -> Self {
        Self {
            db_path: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_filter: "debug".to_string(),
        }
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flashcards")
        .join("flashcards.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.log_filter, "info");
        let path = config.db_path.unwrap();
        assert!(path.ends_with("flashcards/flashcards.db"));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FLASHCARDS_DB_PATH", "/tmp/deck.db"),
            ("FLASHCARDS_STORAGE_KEY", "my_deck"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/deck.db")));
        assert_eq!(config.storage_key, "my_deck");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn blank_db_path_uses_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("FLASHCARDS_DB_PATH", "  ")]));
        assert!(config.db_path.unwrap().ends_with("flashcards.db"));
    }
}
