//! HTTP transport abstraction
//!
//! The client sends every request through a [`Transport`]. `reqwest::Client`
//! is the default; anything else (a tower middleware stack, a test double, a
//! client configured with proxies or timeouts) can be plugged in.

use std::future::Future;
use std::pin::Pin;

use tower::{BoxError, Service, ServiceExt};

/// Future returned by [`Transport::send`].
pub type TransportFuture =
    Pin<Box<dyn Future<Output = Result<reqwest::Response, BoxError>> + Send>>;

/// Something that can send an HTTP request and return the response.
///
/// Implementations decide pooling, timeouts and TLS. Whether concurrent calls
/// on one client are safe is up to the implementation.
pub trait Transport: Send + Sync {
    fn send(&self, request: reqwest::Request) -> TransportFuture;
}

impl Transport for reqwest::Client {
    fn send(&self, request: reqwest::Request) -> TransportFuture {
        let client = self.clone();
        Box::pin(async move { client.execute(request).await.map_err(Into::into) })
    }
}

/// Adapts a [`tower::Service`] into a [`Transport`].
///
/// The service is cloned for every request, so layered stacks built with
/// [`tower::ServiceBuilder`] over a `reqwest::Client` work as-is.
///
/// ```rust,ignore
/// use tower::ServiceBuilder;
/// use active_campaign_sdk::middleware::LoggingMiddleware;
/// use active_campaign_sdk::transport::ServiceTransport;
///
/// let stack = ServiceBuilder::new()
///     .layer(LoggingMiddleware::new())
///     .service(reqwest::Client::new());
/// let transport = ServiceTransport::new(stack);
/// ```
#[derive(Debug, Clone)]
pub struct ServiceTransport<S> {
    service: S,
}

impl<S> ServiceTransport<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn into_inner(self) -> S {
        self.service
    }
}

impl<S> Transport for ServiceTransport<S>
where
    S: Service<reqwest::Request, Response = reqwest::Response> + Clone + Send + Sync + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    fn send(&self, request: reqwest::Request) -> TransportFuture {
        let service = self.service.clone();
        Box::pin(async move { service.oneshot(request).await.map_err(Into::into) })
    }
}
