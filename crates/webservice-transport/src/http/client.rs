//! HTTP transport client implementation
//!
//! Implements the Transport trait on top of a single reqwest client bound
//! to a base URI. Every response, whatever its status, is returned as-is.

use crate::error::{Result, TransportError, error_chain_message};
use crate::traits::{Auth, HttpRequest, HttpResponse, RequestBody, Transport};
use async_trait::async_trait;
use http::HeaderMap;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::trace;
use url::Url;

/// HTTP transport implementation
///
/// Holds one reqwest client for its whole lifetime. Connection pooling,
/// TLS and redirects are whatever reqwest does by default; no retries are
/// attempted.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: ReqwestClient,
    base_uri: Url,
}

impl ReqwestTransport {
    /// Create a transport for `base_uri` with default client settings
    pub fn new(base_uri: &str) -> Result<Self> {
        Self::with_config(ReqwestTransportConfig::new(Url::parse(base_uri)?))
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: ReqwestTransportConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = http::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::Request(format!("invalid header name '{name}': {e}")))?;
            let value = http::HeaderValue::from_str(value)
                .map_err(|e| TransportError::Request(format!("invalid header value: {e}")))?;
            default_headers.append(name, value);
        }

        let mut builder = ReqwestClient::builder().default_headers(default_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let client = builder.build().map_err(|e| TransportError::Request(error_chain_message(&e)))?;

        Ok(Self {
            client,
            base_uri: config.base_uri,
        })
    }

    /// Base URI that relative request URIs are resolved against
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Resolve `uri` against the base URI (RFC 3986 reference resolution).
    pub fn resolve(&self, uri: &str) -> Result<Url> {
        Ok(self.base_uri.join(uri)?)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.resolve(&request.uri)?;
        let options = request.options;

        trace!(method = %request.method, url = %url, "Dispatching request");

        let mut req = self.client.request(request.method, url);

        if !options.query.is_empty() {
            req = req.query(&options.query);
        }

        for (key, value) in &options.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = options.body {
            req = match body {
                RequestBody::Text(text) => req.body(text),
                RequestBody::Bytes(bytes) => req.body(bytes),
                RequestBody::Json(value) => req.json(&value),
                RequestBody::Form(fields) => req.form(&fields),
            };
        }

        req = match options.auth {
            Some(Auth::Basic { username, password }) => req.basic_auth(username, password),
            Some(Auth::Bearer(token)) => req.bearer_auth(token),
            None => req,
        };

        let response = req.send().await?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Flatten a header map into `(name, value)` pairs, one per value.
fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

/// HTTP transport configuration
#[derive(Clone, Debug)]
pub struct ReqwestTransportConfig {
    /// Base URI for relative request URIs
    pub base_uri: Url,

    /// Total request timeout; `None` keeps the client default
    pub timeout: Option<Duration>,

    /// User-Agent header; `None` keeps the client default
    pub user_agent: Option<String>,

    /// Headers sent with every request
    pub default_headers: Vec<(String, String)>,
}

impl ReqwestTransportConfig {
    /// Configuration with only a base URI set
    pub fn new(base_uri: Url) -> Self {
        Self {
            base_uri,
            timeout: None,
            user_agent: None,
            default_headers: Vec::new(),
        }
    }
}
