pub mod commands;
pub mod config;
pub mod db;
pub mod state;

use anyhow::Context;
use config::AppConfig;
use db::SqliteKeyValueStore;
use flashcard_core::Persistence;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Later calls are ignored.
pub fn init_logging(config: &AppConfig) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Open storage and load the deck.
pub fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = match &config.db_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "opening deck database");
            SqliteKeyValueStore::open(path)
                .with_context(|| format!("failed to open database at {}", path.display()))?
        }
        None => SqliteKeyValueStore::open_in_memory().context("failed to open in-memory database")?,
    };
    let persistence = Persistence::with_key(store, config.storage_key.clone());
    Ok(AppState::new(persistence))
}

/// Read configuration, set up logging, and build the application state.
pub fn run() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();
    init_logging(&config);
    build_state(&config)
}
