//! The one failure kind of the remote API: a query that did not produce data.

use thiserror::Error;

/// A remote query failed.
///
/// The variants only exist for diagnostics. Callers apply the same policy to
/// all of them: log, keep the previous state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure before a response arrived.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON array.
    #[error("Malformed response from '{url}': {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    /// Short tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }
}
