//! Local SQLite storage for the deck snapshot.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::SqliteKeyValueStore;
