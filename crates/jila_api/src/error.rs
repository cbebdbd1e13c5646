use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_ERROR_STATUS: u16 = 500;
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Every failed backend call is normalized into this shape.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("API error: {status_code} - {message}")]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
    pub error: bool,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            error: true,
        }
    }

    /// Builds the error from a raw error response body.
    ///
    /// `statusCode` and `message` are read independently, a field with an
    /// unexpected type falls back to its default without dropping the other.
    pub fn from_body(body: &[u8]) -> Self {
        let body: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let status_code = body
            .get("statusCode")
            .and_then(|status| match status {
                Value::Number(number) => number.as_u64(),
                Value::String(text) => text.trim().parse().ok(),
                _ => None,
            })
            .and_then(|status| u16::try_from(status).ok())
            .unwrap_or(DEFAULT_ERROR_STATUS);

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| String::from(DEFAULT_ERROR_MESSAGE));

        Self::new(status_code, message)
    }
}

impl Default for ApiError {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_STATUS, DEFAULT_ERROR_MESSAGE)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(_: reqwest::Error) -> Self {
        ApiError::default()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(_: serde_json::Error) -> Self {
        ApiError::default()
    }
}
