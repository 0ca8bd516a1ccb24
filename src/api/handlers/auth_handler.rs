//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Response, routing::post, Router};
use serde::Deserialize;
use validator::Validate;

use crate::api::codec;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::SignUpInput;

/// User sign-up request
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields, default)]
pub struct SignUpRequest {
    /// User email address
    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: String,
    /// User password (minimum 5 characters)
    #[validate(length(min = 5, message = "password must be at least 5 characters"))]
    pub password: String,
}

impl From<SignUpRequest> for SignUpInput {
    fn from(req: SignUpRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/sign-up", post(sign_up))
}

/// Register a new user
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpRequest>,
) -> AppResult<Response> {
    let user = state.sign_up.execute(payload.into()).await?;

    Ok(codec::encode(StatusCode::CREATED, &UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("a@b.com", "abcde").validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let errors = request("a@b.com", "abcd").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
        assert!(!errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_missing_email_rejected() {
        let req: SignUpRequest = codec::decode(br#"{"password":"abcdef"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_unknown_field_rejected_by_decoder() {
        let result =
            codec::decode::<SignUpRequest>(br#"{"email":"a@b.com","password":"abcde","role":"x"}"#);
        assert!(matches!(result, Err(codec::DecodeError::Shape(_))));
    }
}
