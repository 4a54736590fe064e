//! Client-side failures.

use thiserror::Error;

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Why a client call failed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http {
        /// Response status code.
        status: u16,
        /// The `message` field of the error body, when present.
        message: Option<String>,
    },
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    /// Reading or writing the token file failed.
    #[error("token storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }

    /// The server-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
