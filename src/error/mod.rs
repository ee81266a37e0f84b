//! Application error types for robust error handling.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Shared by unknown email and wrong password so neither case is distinguishable.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";
pub const DUPLICATE_IDENTITY_MESSAGE: &str = "User with that email already exists.";
const SERVER_ERROR_MESSAGE: &str = "Server error.";

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User with that email already exists.")]
    DuplicateIdentity,

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    TokenInvalid(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::DuplicateIdentity
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::TokenExpired | AppError::TokenInvalid(_) => StatusCode::UNAUTHORIZED,
            AppError::StorageUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::DuplicateIdentity => DUPLICATE_IDENTITY_MESSAGE.to_string(),
            AppError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AppError::TokenExpired => "Token expired.".to_string(),
            AppError::TokenInvalid(_) => "Invalid token.".to_string(),
            AppError::StorageUnavailable(_) | AppError::Internal(_) => {
                SERVER_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Unreadable request bodies (bad JSON, missing field, wrong content type) are validation failures.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = Json(json!({ "message": self.public_message() }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(AppError::DuplicateIdentity.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("bad email".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn token_errors_map_to_unauthorized() {
        assert_eq!(AppError::TokenExpired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::TokenInvalid("bad signature".into()).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn storage_fault_hides_detail() {
        let err = AppError::StorageUnavailable(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Server error.");
    }
}
