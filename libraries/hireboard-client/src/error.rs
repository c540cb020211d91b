//! Error types for the Hireboard client.

use hireboard_core::{CoreError, ErrorPayload};
use thiserror::Error;

/// Errors that can occur when talking to the Hireboard backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error(
        "Server error ({status}): {}",
        .payload.as_ref().map(ErrorPayload::message).unwrap_or_default()
    )]
    Api {
        status: u16,
        payload: Option<ErrorPayload>,
    },

    /// Failed to parse a success response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token persistence failed
    #[error("Token storage failed: {0}")]
    Storage(#[from] CoreError),
}

impl ClientError {
    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend rejected the credentials or token
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The backend's error body, if the failure carried one
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            ClientError::Api { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// The backend's error body, or a payload holding `fallback`
    pub fn payload_or(&self, fallback: &str) -> ErrorPayload {
        self.payload()
            .cloned()
            .unwrap_or_else(|| ErrorPayload::from_message(fallback))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
