//! Transport abstraction layer for the webservice helper
//!
//! Separates "send a request" from "normalize the response". The
//! normalizer depends only on the [`Transport`] trait; this crate also
//! ships the reqwest implementation used by default.
//!
//! # Architecture
//!
//! - **Transport trait**: send one request, get a response or a transport failure
//! - **HTTP transport**: reqwest client bound to a base URI
//! - **Error handling**: [`TransportError`] means no response was received
//!
//! # Usage
//!
//! ```ignore
//! use webservice_transport::{HttpRequest, Method, ReqwestTransport, RequestOptions, Transport};
//!
//! let transport = ReqwestTransport::new("https://api.example.com")?;
//! let request = HttpRequest::new(Method::GET, "/users/1", RequestOptions::new());
//! let response = transport.send(request).await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError, error_chain_message};
pub use http::{ReqwestTransport, ReqwestTransportConfig};
pub use traits::{Auth, HttpRequest, HttpResponse, RequestBody, RequestOptions, Transport};

pub use ::http::Method;
pub use url::Url;
