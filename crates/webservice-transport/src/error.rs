//! Transport error types
//!
//! A `TransportError` always means that no usable HTTP response was
//! received. Responses with 4xx/5xx status codes are not errors at this
//! layer.

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Failures that happen before a complete HTTP response is available.
///
/// The `Display` text of each variant is the underlying library's message,
/// so callers can surface it verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request URI could not be resolved against the base URI.
    #[error("{0}")]
    InvalidUri(String),

    /// DNS failure, refused connection, TLS handshake failure.
    #[error("{0}")]
    Connection(String),

    /// The request did not complete within the configured timeout.
    #[error("{0}")]
    Timeout(String),

    /// The response head arrived but the body could not be read.
    #[error("{0}")]
    Body(String),

    /// The request could not be built or sent for another reason.
    #[error("{0}")]
    Request(String),
}

impl TransportError {
    /// Short machine-friendly name of the failure kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUri(_) => "invalid_uri",
            Self::Connection(_) => "connection",
            Self::Timeout(_) => "timeout",
            Self::Body(_) => "body",
            Self::Request(_) => "request",
        }
    }
}

/// Render an error and its `source()` chain as `outer: cause: root`.
///
/// A cause whose text is already contained in the message so far is
/// skipped, so wrappers that repeat their source do not double up.
pub fn error_chain_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain_message(&err);
        if err.is_timeout() {
            Self::Timeout(message)
        } else if err.is_connect() {
            Self::Connection(message)
        } else if err.is_body() || err.is_decode() {
            Self::Body(message)
        } else {
            Self::Request(message)
        }
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUri(err.to_string())
    }
}
