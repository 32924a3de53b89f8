//! Configuration for a webservice

use crate::error::{Error, Result};
use std::time::Duration;
use webservice_transport::{ReqwestTransportConfig, Url};

/// Default `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("webservice/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`WebService`](crate::WebService).
///
/// Only the base URI is required. Everything else defaults to what the
/// underlying HTTP client does on its own; in particular there is no
/// timeout unless one is set here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebServiceConfig {
    /// Base URI that relative request URIs are resolved against
    pub base_uri: Option<String>,

    /// Total request timeout
    pub timeout: Option<Duration>,

    /// User-Agent header value
    pub user_agent: Option<String>,

    /// Custom headers to include with every request
    pub default_headers: Vec<(String, String)>,
}

impl WebServiceConfig {
    /// Create a new configuration with a base URI.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: Some(base_uri.into()),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// This will look for:
    /// - `WEBSERVICE_BASE_URI` for the base URI
    /// - `WEBSERVICE_TIMEOUT` for request timeout (in seconds)
    /// - `WEBSERVICE_USER_AGENT` for the User-Agent header
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(base_uri) = env::var("WEBSERVICE_BASE_URI") {
            config.base_uri = Some(base_uri);
        }

        if let Ok(timeout_str) = env::var("WEBSERVICE_TIMEOUT") {
            let secs = timeout_str
                .trim()
                .parse::<u64>()
                .map_err(|e| Error::InvalidConfig {
                    key: "WEBSERVICE_TIMEOUT".to_string(),
                    reason: e.to_string(),
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Ok(user_agent) = env::var("WEBSERVICE_USER_AGENT") {
            config.user_agent = Some(user_agent);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    ///
    /// Default headers are concatenated, the other's last.
    pub fn merge(mut self, other: WebServiceConfig) -> Self {
        if other.base_uri.is_some() {
            self.base_uri = other.base_uri;
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
        self.default_headers.extend(other.default_headers);

        self
    }

    /// Validate and convert into the transport's configuration.
    pub(crate) fn into_transport_config(self) -> Result<ReqwestTransportConfig> {
        let raw = self
            .base_uri
            .ok_or_else(|| Error::MissingConfig("base_uri".to_string()))?;
        let base_uri = Url::parse(&raw).map_err(|e| Error::invalid_base_uri(&raw, e))?;
        if base_uri.cannot_be_a_base() {
            return Err(Error::invalid_base_uri(&raw, "URI cannot be used as a base"));
        }

        let mut transport = ReqwestTransportConfig::new(base_uri);
        transport.timeout = self.timeout;
        transport.user_agent = Some(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );
        transport.default_headers = self.default_headers;

        Ok(transport)
    }
}
