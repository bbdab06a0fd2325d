//! Error types for the twitterapi.io client.
//!
//! # Design
//! Every non-2xx response lands in `HttpError` with the status code and its
//! reason phrase; the body is never inspected for structured detail, so 4xx
//! and 5xx classes are not distinguished. Argument problems surface as
//! `Configuration` before any request is built.

use thiserror::Error;

/// Errors returned by the client, its transport, and the resource methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument is missing or the client configuration is invalid.
    /// Raised before any network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    HttpError { status: u16, status_text: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The HTTP stack failed before a status was received.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The request was abandoned because its cancellation token fired.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub(crate) fn missing(what: &str) -> Self {
        ApiError::Configuration(format!("{what} is required"))
    }

    /// Status code for `HttpError`, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
