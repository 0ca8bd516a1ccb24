//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::api::codec::{self, DecodeError};
use crate::config::MAX_BODY_BYTES;
use crate::domain::describe_violations;
use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// The body is buffered and decoded through the API codec, so the
/// `Content-Type` header is not inspected.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use signup_api::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct SignUpRequest {
///     #[validate(email)]
///     email: String,
///     #[validate(length(min = 5))]
///     password: String,
/// }
///
/// async fn sign_up(ValidatedJson(payload): ValidatedJson<SignUpRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                DecodeError::TooLarge {
                    limit: MAX_BODY_BYTES,
                }
            } else {
                DecodeError::Malformed(e.body_text())
            }
        })?;

        let value: T = codec::decode(&body)?;

        value
            .validate()
            .map_err(|e| AppError::validation(describe_violations(&e)))?;

        Ok(ValidatedJson(value))
    }
}
