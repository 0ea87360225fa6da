//! Fixed header injection.
//!
//! Sets a fixed set of headers on every outgoing request, replacing any value
//! already present. Useful with an empty client token when credentials come
//! from somewhere other than [`ClientOptions`](crate::ClientOptions), or to
//! add a `User-Agent`.
//!
//! # Example
//!
//! ```ignore
//! use active_campaign_sdk::ActiveCampaign;
//! use active_campaign_sdk::middleware::HeaderMiddleware;
//!
//! let headers = HeaderMiddleware::new().header("Api-Token", token_from_vault)?;
//!
//! let ac = ActiveCampaign::builder()
//!     .base_url("https://youraccount.api-us1.com")
//!     .with_middleware(headers)
//!     .build()?;
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use http::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Request as ReqwestRequest;
use tower::{Layer, Service};

use crate::error::{Error, Result};

/// Middleware that overwrites a fixed set of headers on every request.
#[derive(Debug, Clone, Default)]
pub struct HeaderMiddleware {
    headers: Arc<HeaderMap>,
}

impl HeaderMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. A later call with the same name replaces the value.
    ///
    /// # Errors
    /// Returns `Error::Config` if the name or value is not a valid header.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Config(format!("invalid header name {name:?}: {e}")))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| Error::Config(format!("invalid value for header {name}: {e}")))?;
        value.set_sensitive(true);

        Arc::make_mut(&mut self.headers).insert(name, value);
        Ok(self)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl<S> Layer<S> for HeaderMiddleware {
    type Service = HeaderMiddlewareService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HeaderMiddlewareService {
            inner,
            headers: Arc::clone(&self.headers),
        }
    }
}

/// Service created by [`HeaderMiddleware`].
#[derive(Debug, Clone)]
pub struct HeaderMiddlewareService<S> {
    inner: S,
    headers: Arc<HeaderMap>,
}

impl<S> Service<ReqwestRequest> for HeaderMiddlewareService<S>
where
    S: Service<ReqwestRequest> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: ReqwestRequest) -> Self::Future {
        for (name, value) in self.headers.iter() {
            req.headers_mut().insert(name.clone(), value.clone());
        }

        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move { inner.call(req).await })
    }
}
