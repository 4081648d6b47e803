use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Status reported when the request never produced an HTTP response.
pub const NETWORK_STATUS: u16 = 0;

/// Every API failure, normalized to one shape.
///
/// `status` is the HTTP status, or [`NETWORK_STATUS`] when the request could
/// not complete. `data` holds the parsed error body when there was one.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub data: Option<Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16, data: Option<Value>) -> Self {
        Self {
            message: message.into(),
            status,
            data,
        }
    }

    /// Non-success response. Uses the body's `detail` string when present.
    pub fn http(status: u16, data: Option<Value>) -> Self {
        let message = data
            .as_ref()
            .and_then(|body| body.get("detail"))
            .and_then(Value::as_str)
            .filter(|detail| !detail.is_empty())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::new(message, status, data)
    }

    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Network error occurred".to_string()
        } else {
            message
        };
        Self::new(message, NETWORK_STATUS, None)
    }

    /// Success status but the body does not have the expected shape.
    pub(crate) fn decode(status: u16, reason: impl fmt::Display, data: Option<Value>) -> Self {
        Self::new(format!("Unexpected response body: {reason}"), status, data)
    }

    pub fn is_network(&self) -> bool {
        self.status == NETWORK_STATUS
    }
}
