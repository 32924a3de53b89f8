//! The request-normalizing service

use std::fmt;
use std::sync::Arc;

use webservice_transport::{
    HttpRequest, Method, ReqwestTransport, RequestOptions, Transport, Url,
};

use crate::{
    config::WebServiceConfig,
    error::Result,
    observability::{RequestMetadata, RequestTimer, ResponseMetadata},
    response::NormalizedResponse,
};

/// Issues HTTP requests and normalizes whatever comes back.
///
/// Every call returns a [`NormalizedResponse`]: 4xx/5xx responses are
/// normalized like any other, and a call that gets no response at all
/// becomes status 504 with the error message as body. Nothing is retried.
///
/// The service holds one transport for its lifetime and is cheap to clone.
///
/// # Example
///
/// ```rust,no_run
/// use webservice::{RequestOptions, WebService};
///
/// # async fn example() -> webservice::Result<()> {
/// let service = WebService::new("https://api.example.com")?;
/// let user = service.get("/users/1", RequestOptions::new()).await;
///
/// if user.status_code == 200 {
///     println!("{:?}", user.body.as_json());
/// }
/// # Ok(())
/// # }
/// ```
pub struct WebService<T = ReqwestTransport> {
    transport: Arc<T>,
}

impl<T> Clone for WebService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for WebService<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebService")
            .field("transport", &self.transport)
            .finish()
    }
}

impl WebService<ReqwestTransport> {
    /// Create a service for `base_uri` with default client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI is not an absolute URI or the HTTP
    /// client cannot be built.
    pub fn new(base_uri: impl Into<String>) -> Result<Self> {
        Self::from_config(WebServiceConfig::new(base_uri))
    }

    /// Create a service from a configuration object.
    pub fn from_config(config: WebServiceConfig) -> Result<Self> {
        let transport = ReqwestTransport::with_config(config.into_transport_config()?)?;
        Ok(Self::with_transport(transport))
    }

    /// Base URI that relative request URIs are resolved against.
    pub fn base_uri(&self) -> &Url {
        self.transport.base_uri()
    }
}

impl<T: Transport> WebService<T> {
    /// Create a service over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// The transport this service sends through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET uri`
    pub async fn get(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::GET, uri, options).await
    }

    /// `POST uri`
    pub async fn post(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::POST, uri, options).await
    }

    /// `PUT uri`
    pub async fn put(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::PUT, uri, options).await
    }

    /// `PATCH uri`
    pub async fn patch(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::PATCH, uri, options).await
    }

    /// `DELETE uri`
    pub async fn delete(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::DELETE, uri, options).await
    }

    /// `HEAD uri`
    pub async fn head(&self, uri: &str, options: RequestOptions) -> NormalizedResponse {
        self.request(Method::HEAD, uri, options).await
    }

    /// Send one request and normalize the outcome.
    ///
    /// `uri` is resolved against the base URI; `options` go to the
    /// transport untouched.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        options: RequestOptions,
    ) -> NormalizedResponse {
        let metadata = RequestMetadata::new(method.as_str(), uri);
        metadata.log_request();
        let timer = RequestTimer::start();

        match self
            .transport
            .send(HttpRequest::new(method, uri, options))
            .await
        {
            Ok(response) => {
                let body_size = response.body.len();
                let normalized = NormalizedResponse::from_response(response);
                ResponseMetadata::new(normalized.status_code, timer.elapsed())
                    .with_body_size(body_size)
                    .log_response(&metadata);
                normalized
            }
            Err(err) => {
                let normalized = NormalizedResponse::from_transport_error(&err);
                ResponseMetadata::new(normalized.status_code, timer.elapsed())
                    .log_transport_failure(&metadata, &err);
                normalized
            }
        }
    }
}
