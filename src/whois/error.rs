//! Domain oracle error types

use thiserror::Error;

/// Oracle failure with classification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct WhoisError {
    pub kind: WhoisErrorKind,
    pub message: String,
}

impl WhoisError {
    pub fn new(kind: WhoisErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(WhoisErrorKind::Network, message)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::new(WhoisErrorKind::Status, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(WhoisErrorKind::Decode, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(WhoisErrorKind::Timeout, message)
    }
}

impl From<reqwest::Error> for WhoisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            WhoisError::timeout(e.to_string())
        } else if e.is_decode() {
            WhoisError::decode(e.to_string())
        } else {
            WhoisError::network(e.to_string())
        }
    }
}

/// Error classification, used for logging only (lookups are never retried)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhoisErrorKind {
    /// Connection or transport failure
    Network,
    /// API answered with a non-success status
    Status,
    /// Response body was not the expected JSON
    Decode,
    /// No answer within the lookup deadline
    Timeout,
}
