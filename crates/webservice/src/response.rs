//! The normalized response record

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;
use webservice_transport::{HttpResponse, TransportError};

/// The only content type whose body is decoded as JSON.
///
/// Matching is exact: `application/json` without the charset parameter,
/// or with different casing, is passed through as text.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Status code reported when no response was received at all.
pub const TRANSPORT_FAILURE_STATUS: u16 = 504;

/// Separator used when folding repeated header values into one string.
pub const HEADER_VALUE_SEPARATOR: &str = ", ";

/// Response body, either decoded JSON or the raw text.
///
/// Serializes untagged, so a record renders as `{"body": {"id": 1}, ...}`
/// or `{"body": "plain text", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Body decoded from a JSON response
    Json(Value),

    /// Body passed through as text
    Text(String),
}

impl ResponseBody {
    /// The decoded JSON value, if the body was JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, if the body was passed through
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Whether the body was decoded as JSON
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<String> for ResponseBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ResponseBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Uniform `{body, status_code, headers}` shape for every outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResponse {
    /// Decoded JSON or raw text
    pub body: ResponseBody,

    /// HTTP status, or [`TRANSPORT_FAILURE_STATUS`] when nothing came back
    pub status_code: u16,

    /// One entry per header name, repeated values joined with `", "`
    pub headers: BTreeMap<String, String>,
}

impl NormalizedResponse {
    /// Normalize a response received from the server, whatever its status.
    pub fn from_response(response: HttpResponse) -> Self {
        let headers = fold_headers(response.headers);
        let text = match String::from_utf8(response.body) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        let body = parse_body(text, headers.get("Content-Type").map(String::as_str));

        Self {
            body,
            status_code: response.status,
            headers,
        }
    }

    /// Normalize a failure where no response was received.
    pub fn from_transport_error(error: &TransportError) -> Self {
        Self {
            body: ResponseBody::Text(error.to_string()),
            status_code: TRANSPORT_FAILURE_STATUS,
            headers: BTreeMap::new(),
        }
    }

    /// Look up a header by name, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `Content-Type` header, if any
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    /// Check if the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Fold `(name, value)` pairs into one canonically named entry per header.
///
/// Values keep arrival order. Names that differ only in case end up in
/// the same entry.
pub fn fold_headers<I>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut folded: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in pairs {
        folded
            .entry(canonical_header_name(&name))
            .and_modify(|joined| {
                joined.push_str(HEADER_VALUE_SEPARATOR);
                joined.push_str(&value);
            })
            .or_insert(value);
    }
    folded
}

/// Title-case a header name: `content-type` becomes `Content-Type`.
pub fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

/// Decode `text` as JSON when `content_type` is exactly [`JSON_CONTENT_TYPE`].
///
/// A body that fails to decode is kept as text.
pub fn parse_body(text: String, content_type: Option<&str>) -> ResponseBody {
    match content_type {
        Some(JSON_CONTENT_TYPE) => match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(e) => {
                warn!(
                    error = %e,
                    body_size = text.len(),
                    "Declared JSON body failed to decode, keeping raw text"
                );
                ResponseBody::Text(text)
            }
        },
        _ => ResponseBody::Text(text),
    }
}
