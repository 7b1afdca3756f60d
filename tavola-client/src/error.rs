//! Client error types

use thiserror::Error;

/// Transport-level client error.
///
/// A response that parses but carries `success: false` is not an error at
/// this layer; the caller reads the server message from the payload. Only
/// network failures and unparseable bodies surface here.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request or body decode failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
