//! OEIS client error types

use thiserror::Error;

/// OEIS query and transport errors
#[derive(Error, Debug)]
pub enum OeisError {
    /// HTTP error from the default transport
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the encyclopedia
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code (e.g., 404, 500)
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Malformed JSON payload
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Operation cancelled through its cancellation token
    #[error("operation cancelled")]
    Cancelled,

    /// Failure reported by a custom transport implementation
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type alias using OeisError
pub type Result<T> = std::result::Result<T, OeisError>;
