//! Error types for the Papillon client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Papillon client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Requested resource name has no endpoint template.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Interval outside the supported set (1h, 12h, 24h).
    #[error("Invalid interval '{0}' (expected 1h, 12h, 24h or code 0, 1, 2)")]
    InvalidInterval(String),

    /// Network failure reaching the Papillon master.
    #[error("Transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Response body is not valid JSON.
    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Non-success HTTP status from the Papillon master.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client error outside the request path.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Check if this error came from the transport layer.
    ///
    /// Transport failures are the only class a caller might reasonably
    /// retry; everything else indicates bad input or a bad response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout(_))
    }
}
