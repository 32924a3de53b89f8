//! # webservice
//!
//! A thin helper for calling HTTP APIs that always hands back the same
//! shape: `{ body, status_code, headers }`.
//!
//! - Bodies served as `application/json; charset=utf-8` are decoded into
//!   [`serde_json::Value`]; everything else stays raw text
//! - Repeated headers are joined with `", "`
//! - 4xx/5xx responses are returned like any other response
//! - When nothing comes back at all (DNS, refused connection, timeout) the
//!   result is status 504 with the error message as body
//!
//! Transport concerns (pooling, TLS, redirects) are left to `reqwest`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webservice::{RequestOptions, WebService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = WebService::new("https://api.example.com")?;
//!
//!     let response = service
//!         .get("/users/1", RequestOptions::new().with_query("fields", "id,name"))
//!         .await;
//!
//!     println!("{} {:?}", response.status_code, response.body);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use config::WebServiceConfig;
pub use error::{Error, Result};
pub use response::{NormalizedResponse, ResponseBody};
pub use service::WebService;

pub use webservice_transport::{
    Auth, HttpRequest, HttpResponse, Method, RequestBody, RequestOptions, ReqwestTransport,
    Transport, TransportError,
};

// Module declarations
pub mod config;
pub mod error;
pub mod observability;
pub mod response;
pub mod service;

#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

/// `GET`
pub const GET: Method = Method::GET;
/// `POST`
pub const POST: Method = Method::POST;
/// `PUT`
pub const PUT: Method = Method::PUT;
/// `PATCH`
pub const PATCH: Method = Method::PATCH;
/// `DELETE`
pub const DELETE: Method = Method::DELETE;
/// `HEAD`
pub const HEAD: Method = Method::HEAD;

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
