//! Database error types.

use flashcard_core::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DbError> for StorageError {
    fn from(e: DbError) -> Self {
        StorageError::Backend(e.to_string())
    }
}
