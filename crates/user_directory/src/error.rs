//! User directory error types.

use thiserror::Error;

/// Errors that can occur during user directory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// A field failed validation.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The email is already registered to another user.
    #[error("email already registered")]
    EmailTaken,

    /// Entity not found.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
}

impl DirectoryError {
    /// Creates a validation error for a field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }
}

/// Result type for user directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
