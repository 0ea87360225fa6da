use std::sync::Arc;
use std::time::Duration;

use reqwest::{Request as ReqwestRequest, Response as ReqwestResponse};
use tower::layer::util::Identity;
use tower::{BoxError, Layer, Service};

use crate::error::{Error, Result};
use crate::transport::{ServiceTransport, Transport};

use super::active_campaign_client::ClientOptions;
use super::ActiveCampaign;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Builder for [`ActiveCampaign`]
///
/// `timeout`, `connect_timeout` and `with_middleware` only apply to the
/// default reqwest transport. A transport passed with
/// [`transport`](Self::transport) is used exactly as given.
#[must_use]
#[derive(Default)]
pub struct ActiveCampaignBuilder<M = Identity> {
    base_url: Option<String>,
    token: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    middleware: Option<M>,
}

impl<M> std::fmt::Debug for ActiveCampaignBuilder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveCampaignBuilder")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport.as_ref().map(|_| ".."))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("middleware", &self.middleware.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}

impl<M> ActiveCampaignBuilder<M> {
    /// Set the account URL, e.g. `https://youraccount.api-us1.com`
    ///
    /// `/api/3/` is appended when missing.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API token
    ///
    /// Default: empty, for transports that inject the header themselves.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Use a caller-configured transport
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the total timeout for requests
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Wrap the default reqwest transport in a tower layer
    pub fn with_middleware<M2>(self, middleware: M2) -> ActiveCampaignBuilder<M2>
    where
        M2: Layer<reqwest::Client>,
    {
        ActiveCampaignBuilder {
            base_url: self.base_url,
            token: self.token,
            transport: self.transport,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            middleware: Some(middleware),
        }
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `Error::Config` if the base URL is missing or invalid, if both a
    /// transport and a middleware were given, or if the default HTTP client
    /// cannot be built.
    pub fn build(self) -> Result<ActiveCampaign>
    where
        M: Layer<reqwest::Client>,
        M::Service: Service<ReqwestRequest, Response = ReqwestResponse>
            + Clone
            + Send
            + Sync
            + 'static,
        <M::Service as Service<ReqwestRequest>>::Error: Into<BoxError>,
        <M::Service as Service<ReqwestRequest>>::Future: Send + 'static,
    {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;
        let token = self.token.unwrap_or_default();

        let transport: Arc<dyn Transport> = match (self.transport, self.middleware) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(
                    "a custom transport cannot be combined with with_middleware".to_string(),
                ))
            }
            (Some(transport), None) => transport,
            (None, middleware) => {
                let timeout = self
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
                let connect_timeout = self
                    .connect_timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

                let http = reqwest::Client::builder()
                    .timeout(timeout)
                    .connect_timeout(connect_timeout)
                    .build()
                    .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

                match middleware {
                    Some(middleware) => Arc::new(ServiceTransport::new(middleware.layer(http))),
                    None => Arc::new(http),
                }
            }
        };

        ActiveCampaign::new(ClientOptions {
            transport: Some(transport),
            base_url,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::task::{Context, Poll};

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_builder_default_values() {
        let ac = ActiveCampaign::builder()
            .base_url("https://custom-url")
            .token("my-token")
            .build()
            .unwrap();

        assert_eq!(ac.client().base_url().as_str(), "https://custom-url/api/3/");
    }

    #[test]
    fn test_builder_custom_timeouts() {
        let ac = ActiveCampaign::builder()
            .base_url("https://custom-url/api/3")
            .token("my-token")
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(ac.client().base_url().as_str(), "https://custom-url/api/3/");
    }

    #[test]
    fn test_missing_base_url() {
        let result = ActiveCampaign::builder().token("my-token").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_transport_and_middleware_conflict() {
        let result = ActiveCampaign::builder()
            .base_url("https://custom-url")
            .transport(Arc::new(reqwest::Client::new()))
            .with_middleware(crate::middleware::LoggingMiddleware::new())
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_middleware_configured_and_executes() {
        #[derive(Clone)]
        struct FlagLayer {
            flag: Arc<AtomicBool>,
        }

        impl Layer<reqwest::Client> for FlagLayer {
            type Service = FlagService;

            fn layer(&self, inner: reqwest::Client) -> Self::Service {
                FlagService {
                    inner,
                    flag: Arc::clone(&self.flag),
                }
            }
        }

        #[derive(Clone)]
        struct FlagService {
            inner: reqwest::Client,
            flag: Arc<AtomicBool>,
        }

        impl Service<ReqwestRequest> for FlagService {
            type Response = ReqwestResponse;
            type Error = reqwest::Error;
            type Future =
                Pin<Box<dyn Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>>;

            fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
                Poll::Ready(Ok(()))
            }

            fn call(&mut self, req: ReqwestRequest) -> Self::Future {
                self.flag.store(true, Ordering::SeqCst);
                let client = self.inner.clone();
                Box::pin(async move { client.execute(req).await })
            }
        }

        let invoked = Arc::new(AtomicBool::new(false));
        let layer = FlagLayer {
            flag: Arc::clone(&invoked),
        };

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/3/tags"))
            .and(header("Api-Token", "my-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tags": [],
                "meta": {"total": "0"}
            })))
            .mount(&mock_server)
            .await;

        let ac = ActiveCampaign::builder()
            .base_url(mock_server.uri())
            .token("my-token")
            .with_middleware(layer)
            .build()
            .unwrap();

        let (tags, _) = ac.tags().list_all().await.unwrap();

        assert!(tags.tags.is_empty());
        assert!(invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_builder_with_logging_middleware_builds() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/3/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"tags": []})))
            .mount(&mock_server)
            .await;

        let ac = ActiveCampaign::builder()
            .base_url(mock_server.uri())
            .token("my-token")
            .with_middleware(crate::middleware::LoggingMiddleware::new())
            .build()
            .unwrap();

        assert!(ac.tags().list_all().await.is_ok());
    }
}
