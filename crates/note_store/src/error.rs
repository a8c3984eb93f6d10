//! Note store error types.

use thiserror::Error;

/// Errors that can occur during note store operations.
#[derive(Debug, Error)]
pub enum NoteStoreError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for note store operations.
pub type NoteStoreResult<T> = Result<T, NoteStoreError>;
