//! Error types for the webservice helper
//!
//! Requests themselves never fail: every outcome is folded into a
//! [`NormalizedResponse`](crate::NormalizedResponse). The errors here come
//! from building a service.

use thiserror::Error;
use webservice_transport::TransportError;

/// Result type alias for operations that can fail with a webservice error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or configuring a service.
#[derive(Debug, Error)]
pub enum Error {
    /// The base URI could not be parsed as an absolute URI.
    #[error("Invalid base URI '{uri}': {reason}")]
    InvalidBaseUri {
        /// The rejected input
        uri: String,
        /// Parser message
        reason: String,
    },

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// A configuration value could not be parsed.
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidConfig {
        /// Configuration key
        key: String,
        /// What was wrong with it
        reason: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_base_uri(uri: &str, reason: impl ToString) -> Self {
        Error::InvalidBaseUri {
            uri: uri.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::HttpClient(err.to_string())
    }
}
