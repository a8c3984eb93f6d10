//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use user_directory::DirectoryError;

/// Error codes returned in error response bodies.
pub mod error_codes {
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const EMAIL_TAKEN: &str = "EMAIL_TAKEN";
    pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Directory operation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message, field) = match &self {
            ServerError::Directory(DirectoryError::Validation { field, message }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                error_codes::VALIDATION_FAILED,
                message.clone(),
                Some(*field),
            ),
            ServerError::Directory(DirectoryError::EmailTaken) => (
                StatusCode::BAD_REQUEST,
                error_codes::EMAIL_TAKEN,
                self.to_string(),
                None,
            ),
            ServerError::Directory(DirectoryError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                error_codes::RESOURCE_NOT_FOUND,
                self.to_string(),
                None,
            ),
            ServerError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                msg.clone(),
                None,
            ),
        };

        let mut error = json!({
            "code": error_code,
            "message": message,
        });
        if let Some(field) = field {
            error["field"] = json!(field);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: ServerError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(DirectoryError::validation("name", "must not be empty").into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(DirectoryError::EmailTaken.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DirectoryError::not_found("User", "1").into()),
            StatusCode::NOT_FOUND
        );
    }
}
