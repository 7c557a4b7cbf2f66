//! Error types for Tatum API operations.

/// Errors that can occur when interacting with the Tatum API.
#[derive(Debug, thiserror::Error)]
pub enum TatumError {
    /// A parameter failed local validation; no request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request failed at the transport level or returned a
    /// non-success status.
    #[error("Tatum API error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("invalid JSON response from Tatum API")]
    InvalidJson,

    /// An otherwise valid response was missing a required field.
    #[error("missing field `{0}` in Tatum API response")]
    MissingField(&'static str),
}
