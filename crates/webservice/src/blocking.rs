//! Blocking facade over [`WebService`](crate::WebService)
//!
//! Each call blocks the current thread until the transport returns. The
//! facade owns a current-thread tokio runtime that drives the async
//! service.
//!
//! # Panics
//!
//! Calls panic when made from inside an async runtime, as
//! `Runtime::block_on` does. Use the async service there instead.

use tokio::runtime::{Builder, Runtime};
use webservice_transport::{Method, ReqwestTransport, RequestOptions, Transport, Url};

use crate::{config::WebServiceConfig, error::Result, response::NormalizedResponse};

/// Synchronous request normalizer.
#[derive(Debug)]
pub struct WebService<T = ReqwestTransport> {
    inner: crate::WebService<T>,
    runtime: Runtime,
}

impl WebService<ReqwestTransport> {
    /// Create a blocking service for `base_uri` with default client settings.
    pub fn new(base_uri: impl Into<String>) -> Result<Self> {
        Self::from_config(WebServiceConfig::new(base_uri))
    }

    /// Create a blocking service from a configuration object.
    pub fn from_config(config: WebServiceConfig) -> Result<Self> {
        Self::from_async(crate::WebService::from_config(config)?)
    }

    /// Base URI that relative request URIs are resolved against.
    pub fn base_uri(&self) -> &Url {
        self.inner.base_uri()
    }
}

impl<T: Transport> WebService<T> {
    /// Create a blocking service over any transport.
    pub fn with_transport(transport: T) -> Result<Self> {
        Self::from_async(crate::WebService::with_transport(transport))
    }

    /// Wrap an existing async service.
    pub fn from_async(inner: crate::WebService<T>) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    /// `GET uri`
    pub fn get(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::GET, uri, options)
    }

    /// `POST uri`
    pub fn post(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::POST, uri, options)
    }

    /// `PUT uri`
    pub fn put(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::PUT, uri, options)
    }

    /// `PATCH uri`
    pub fn patch(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::PATCH, uri, options)
    }

    /// `DELETE uri`
    pub fn delete(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::DELETE, uri, options)
    }

    /// `HEAD uri`
    pub fn head(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::HEAD, uri, options)
    }

    /// Send one request and normalize the outcome, blocking until done.
    pub fn request(&self, method: Method, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.runtime
            .block_on(self.inner.request(method, uri, options))
    }
}
