//! Client error type shared by both integrations.

use thiserror::Error;

/// Errors raised by the integration clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure or non-success status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),
}
