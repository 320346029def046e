//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Local pre-network validation failure. The request never left the
    /// client.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the request or returned an error body. The
    /// message is surfaced verbatim when the server provided one.
    #[error("{0}")]
    Rejected(String),

    /// A watch is already running; stop it before starting another.
    #[error("A job is already being watched")]
    WatchInProgress,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// True when the failure never reached the network.
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::Validation(_) | ClientError::WatchInProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_verbatim() {
        let err = ClientError::rejected("Invalid file type");
        assert_eq!(err.to_string(), "Invalid file type");
    }

    #[test]
    fn test_local_errors() {
        assert!(ClientError::validation("too large").is_local());
        assert!(ClientError::WatchInProgress.is_local());
        assert!(!ClientError::rejected("nope").is_local());
    }
}
