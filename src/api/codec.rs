//! JSON codec - Body decoding and response encoding.
//!
//! Every response body leaving the API goes through `encode`, so successful
//! payloads and `{"error": ...}` bodies share one content type and shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{error::Category, Value};
use thiserror::Error;

use crate::config::MAX_BODY_BYTES;

/// Request body decoding failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("request body is empty")]
    Empty,

    #[error("malformed JSON: {0}")]
    Malformed(String),

    #[error("invalid request body: {0}")]
    Shape(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Decode a JSON object body into `T`.
///
/// Arrays and scalars are rejected even when `T` could be read from a
/// sequence. Unknown fields are only rejected when `T` opts in with
/// `#[serde(deny_unknown_fields)]`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    if body.len() > MAX_BODY_BYTES {
        return Err(DecodeError::TooLarge {
            limit: MAX_BODY_BYTES,
        });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }

    let value: Value = serde_json::from_slice(body).map_err(classify)?;
    if !value.is_object() {
        return Err(DecodeError::Shape(format!(
            "expected a JSON object, found {}",
            kind(&value)
        )));
    }

    serde_json::from_value(value).map_err(classify)
}

fn classify(e: serde_json::Error) -> DecodeError {
    match e.classify() {
        Category::Data => DecodeError::Shape(e.to_string()),
        Category::Io | Category::Syntax | Category::Eof => DecodeError::Malformed(e.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Encode `value` as a JSON response with `status`.
pub fn encode<T: Serialize>(status: StatusCode, value: &T) -> Response {
    (status, Json(value)).into_response()
}

/// Encode an `{"error": message}` response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    encode(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}
