//! Transport trait and request/response types
//!
//! Defines the `Transport` trait that concrete HTTP clients implement, and
//! the plain data types that flow through it.

use crate::error::Result;
use async_trait::async_trait;
use http::Method;
use serde::{Deserialize, Serialize};

/// Authentication applied to a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Auth {
    /// HTTP basic authentication
    Basic {
        /// User name
        username: String,
        /// Password, omitted when `None`
        password: Option<String>,
    },

    /// `Authorization: Bearer <token>`
    Bearer(String),
}

/// Request body, passed to the client as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestBody {
    /// Raw text body
    Text(String),

    /// Raw byte body
    Bytes(Vec<u8>),

    /// JSON body, sets `Content-Type: application/json`
    Json(serde_json::Value),

    /// URL-encoded form body
    Form(Vec<(String, String)>),
}

/// Per-request options bag.
///
/// Nothing in here is interpreted by the normalizing layer; the transport
/// hands every field to the underlying HTTP client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    /// Query string parameters, appended in order
    pub query: Vec<(String, String)>,

    /// Extra request headers; repeated names are sent as repeated headers
    pub headers: Vec<(String, String)>,

    /// Request body
    pub body: Option<RequestBody>,

    /// Authentication
    pub auth: Option<Auth>,
}

impl RequestOptions {
    /// Create an empty options bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header to the request
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set the request body
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a JSON request body
    pub fn with_json(self, value: serde_json::Value) -> Self {
        self.with_body(RequestBody::Json(value))
    }

    /// Set a text request body
    pub fn with_text_body(self, text: impl Into<String>) -> Self {
        self.with_body(RequestBody::Text(text.into()))
    }

    /// Set a URL-encoded form body
    pub fn with_form<K, V>(self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.with_body(RequestBody::Form(fields))
    }

    /// Use HTTP basic authentication
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth = Some(Auth::Basic {
            username: username.into(),
            password: Some(password.into()),
        });
        self
    }

    /// Use HTTP basic authentication with a user name and no password
    pub fn with_basic_auth_user(mut self, username: impl Into<String>) -> Self {
        self.auth = Some(Auth::Basic {
            username: username.into(),
            password: None,
        });
        self
    }

    /// Use bearer token authentication
    pub fn with_bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(Auth::Bearer(token.into()));
        self
    }
}

/// HTTP request to send
///
/// `uri` may be relative; the transport resolves it against its base URI.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,

    /// Target URI, absolute or relative to the transport's base URI
    pub uri: String,

    /// Options passed through to the client
    pub options: RequestOptions,
}

impl HttpRequest {
    /// Create a new HTTP request
    pub fn new(method: Method, uri: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            method,
            uri: uri.into(),
            options,
        }
    }
}

/// HTTP response as received, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers in arrival order, one entry per value
    pub headers: Vec<(String, String)>,

    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if response is an error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// All values of a header (case-insensitive), in arrival order
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A capability to send one HTTP request.
///
/// `Ok` carries every response the server produced, whatever its status.
/// `Err` is reserved for the case where no response was received at all.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and receive a response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
