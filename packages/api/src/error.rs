//! Errors surfaced by the remote API client.

use thiserror::Error;

/// The only error kind returned by [`crate::Backend`] operations.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// The response body could not be decoded.
    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl RequestError {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
