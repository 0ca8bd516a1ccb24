//! Centralized error handling.
//!
//! Provides the single error type handlers return, with automatic HTTP
//! response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::codec::{self, DecodeError};
use crate::domain::RepositoryError;
use crate::services::SignUpError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("{0}")]
    Validation(String),

    // Storage errors
    #[error("{0}")]
    Persistence(String),

    #[error("{0}")]
    Conflict(String),

    // Internal
    #[error("internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::Validation(_) | AppError::Persistence(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal error");
                self.to_string()
            }
            _ => {
                tracing::warn!(status = %self.status(), error = %self, "request rejected");
                self.to_string()
            }
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl From<SignUpError> for AppError {
    fn from(err: SignUpError) -> Self {
        match err {
            SignUpError::Validation(e) => AppError::Validation(e.to_string()),
            SignUpError::DomainValidation(msg) => AppError::Validation(msg),
            SignUpError::Persistence(e @ RepositoryError::Conflict(_)) => {
                AppError::Conflict(e.to_string())
            }
            SignUpError::Persistence(e) => AppError::Persistence(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        codec::error_response(status, self.user_message())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HashingError;

    #[test]
    fn test_sign_up_errors_map_to_status() {
        let cases = [
            (
                SignUpError::Validation(HashingError::TooLong { max: 4096 }),
                StatusCode::BAD_REQUEST,
            ),
            (
                SignUpError::DomainValidation("email must be a valid email address".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                SignUpError::Persistence(RepositoryError::Rejected("disk full".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                SignUpError::Persistence(RepositoryError::Conflict("Email".into())),
                StatusCode::CONFLICT,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_conflict_message_names_entity() {
        let err = AppError::from(SignUpError::Persistence(RepositoryError::Conflict(
            "Email".into(),
        )));
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn test_internal_detail_hidden() {
        let err = AppError::internal("pool exhausted");
        assert_eq!(err.to_string(), "internal server error");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_decode_error_is_bad_request() {
        let err = AppError::from(DecodeError::Empty);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "request body is empty");
    }
}
