use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use log::{debug, info};
use reqwest::{Request, Response};
use tower::{Layer, Service};

/// Logs every request and its response status and latency.
///
/// Headers are never logged, so the `Api-Token` does not leak. Query
/// parameters with sensitive names are redacted.
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    verbose: bool,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Log at `debug` level with more detail instead of `info`.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for LoggingMiddleware {
    type Service = LoggingMiddlewareService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddlewareService {
            inner,
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingMiddlewareService<S> {
    inner: S,
    verbose: bool,
}

const SENSITIVE_FIELDS: &[&str] = &["api_token", "api-token", "apitoken", "token", "password"];

impl<S> LoggingMiddlewareService<S> {
    fn redact_url(url: &str) -> String {
        let Some((base, query)) = url.split_once('?') else {
            return url.to_string();
        };

        let redacted_query = query
            .split('&')
            .map(|param| match param.split_once('=') {
                Some((key, _)) if SENSITIVE_FIELDS.iter().any(|s| key.eq_ignore_ascii_case(s)) => {
                    format!("{key}=[REDACTED]")
                }
                _ => param.to_string(),
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{base}?{redacted_query}")
    }

    fn log_request(method: &str, url: &str, verbose: bool) {
        let safe_url = Self::redact_url(url);
        if verbose {
            debug!("[ActiveCampaign] >>> {} {}", method, safe_url);
        } else {
            info!("[ActiveCampaign] {} {}", method, safe_url);
        }
    }

    fn log_response(status: u16, duration: std::time::Duration, verbose: bool) {
        if verbose {
            debug!(
                "[ActiveCampaign] <<< {} - {} ({:?})",
                status,
                Self::status_text(status),
                duration
            );
        } else {
            info!("[ActiveCampaign] {} ({:?})", status, duration);
        }
    }

    fn status_text(status: u16) -> &'static str {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }
}

impl<S> Service<Request> for LoggingMiddlewareService<S>
where
    S: Service<Request, Response = Response> + Send + Clone + 'static,
    S::Future: Send,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = req.method().as_str().to_string();
        let url = req.url().to_string();
        let verbose = self.verbose;
        // Swap in a fresh clone; the ready one services this request.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            Self::log_request(&method, &url, verbose);

            let start = Instant::now();
            let response = inner.call(req).await?;
            let duration = start.elapsed();

            Self::log_response(response.status().as_u16(), duration, verbose);

            Ok(response)
        })
    }
}
