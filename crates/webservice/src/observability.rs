//! Structured logging for requests and their normalized outcomes
//!
//! Every call made through a [`WebService`](crate::WebService) is logged
//! here: one `debug` event before sending, then either an `info` event
//! for a received response or a `warn` event for a transport failure.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use webservice_transport::TransportError;

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI as given by the caller
    pub uri: String,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
        }
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(method = %self.method, uri = %self.uri, "Sending HTTP request");
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes (optional)
    pub body_size: Option<usize>,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, elapsed: Duration) -> Self {
        Self {
            status,
            body_size: None,
            elapsed,
        }
    }

    /// Set the response body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log a received response. 4xx/5xx are still responses.
    pub fn log_response(&self, request: &RequestMetadata) {
        info!(
            method = %request.method,
            uri = %request.uri,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            body_size = self.body_size,
            "HTTP response received"
        );
    }

    /// Log a transport failure
    pub fn log_transport_failure(&self, request: &RequestMetadata, error: &TransportError) {
        warn!(
            method = %request.method,
            uri = %request.uri,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            kind = error.kind(),
            error = %error,
            "HTTP request failed without a response"
        );
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `webservice=info` when `RUST_LOG` is unset. Returns
/// `false` if a global subscriber was already installed.
#[cfg(feature = "trace")]
pub fn init_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("webservice=info,webservice_transport=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
