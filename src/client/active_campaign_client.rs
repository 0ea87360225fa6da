//! ActiveCampaign HTTP client core
//!
//! Builds requests against the versioned API root, injects the `Api-Token`
//! header, sends them through the configured [`Transport`] and decodes the
//! JSON responses.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::response::Response;
use crate::transport::Transport;

/// Versioned path every request URL lives under.
pub const API_PREFIX: &str = "api/3/";

/// Name of the authentication header, as documented by ActiveCampaign.
pub const API_TOKEN_HEADER: &str = "Api-Token";

pub(crate) const BASE_URL_ENV: &str = "ACTIVE_CAMPAIGN_BASE_URL";
pub(crate) const TOKEN_ENV: &str = "ACTIVE_CAMPAIGN_TOKEN";

const API_TOKEN: HeaderName = HeaderName::from_static("api-token");

/// Options for [`ActiveCampaignClient::new`].
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Transport used to send requests. `None` means a default `reqwest::Client`.
    pub transport: Option<Arc<dyn Transport>>,
    /// Account URL, e.g. `https://youraccount.api-us1.com`
    pub base_url: String,
    /// API token sent verbatim in the `Api-Token` header
    pub token: String,
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("transport", &self.transport.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl ClientOptions {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            transport: None,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Use a caller-provided transport instead of the default one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Read `ACTIVE_CAMPAIGN_BASE_URL` and `ACTIVE_CAMPAIGN_TOKEN`.
    ///
    /// # Errors
    /// Returns `Error::Config` if either variable is missing or not unicode.
    pub fn from_env() -> Result<Self> {
        let read = |key: &str| {
            std::env::var(key).map_err(|e| Error::Config(format!("{key}: {e}")))
        };
        Ok(Self::new(read(BASE_URL_ENV)?, read(TOKEN_ENV)?))
    }
}

/// What [`ActiveCampaignClient::execute`] does with a successful response body.
#[derive(Debug)]
pub enum Decode<'a, T> {
    /// Leave the body in the returned [`Response`] only.
    None,
    /// Append the body verbatim to the buffer.
    Raw(&'a mut Vec<u8>),
    /// Parse the body as JSON into the target.
    ///
    /// An empty body leaves the target untouched.
    Json(&'a mut T),
}

/// ActiveCampaign API client
///
/// Holds the normalized base URL, the token and a shared transport. Cheap to
/// clone; clones share the transport.
#[derive(Clone)]
pub struct ActiveCampaignClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    token: HeaderValue,
}

impl std::fmt::Debug for ActiveCampaignClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveCampaignClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ActiveCampaignClient {
    /// Create a client from options.
    ///
    /// # Errors
    /// Returns `Error::Config` if the base URL cannot be parsed or the token is
    /// not a valid header value.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let base_url = normalize_base_url(&options.base_url)?;

        let mut token = HeaderValue::from_str(&options.token).map_err(|_| {
            Error::Config("token contains characters not allowed in an HTTP header".to_string())
        })?;
        token.set_sensitive(true);

        let transport = match options.transport {
            Some(transport) => transport,
            None => Arc::new(reqwest::Client::new()),
        };

        Ok(Self {
            transport,
            base_url,
            token,
        })
    }

    /// Get the normalized base URL, always ending in `api/3/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an API request.
    ///
    /// `path` is resolved relative to the base URL; leading slashes are
    /// ignored, so `"/contacts"` and `"contacts"` are the same request. A
    /// `Some` body is serialized as JSON.
    ///
    /// # Errors
    /// - `Error::Url` if `path` is not a relative reference
    /// - `Error::Serialization` if the body cannot be encoded
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = resolve_path(&self.base_url, path)?;
        let mut request = reqwest::Request::new(method, url);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::Serialization)?;
            *request.body_mut() = Some(payload.into());
        }

        let headers = request.headers_mut();
        headers.insert(API_TOKEN, self.token.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(request)
    }

    /// Send a request and decode the response into `target`.
    ///
    /// The status is checked before anything is decoded: a non-2xx response
    /// is returned as `Error::Api` and `target` is not touched.
    ///
    /// # Errors
    /// - `Error::Transport` if the request could not be sent or the body read
    /// - `Error::Api` for a status outside 200-299
    /// - `Error::Decode` if a JSON target was given and the body does not parse
    pub async fn execute<T>(
        &self,
        request: reqwest::Request,
        target: Decode<'_, T>,
    ) -> Result<Response>
    where
        T: DeserializeOwned,
    {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("[ActiveCampaign] >>> {} {}", method, url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(Error::Transport)?;
        let response = Response::read(response)
            .await
            .map_err(|e| Error::Transport(e.into()))?;

        debug!(
            "[ActiveCampaign] <<< {} {} {}",
            method,
            url,
            response.status().as_u16()
        );

        let response = check_response(response)?;
        decode_into(response, target)
    }

    /// Send a request without decoding the body.
    pub async fn send(&self, request: reqwest::Request) -> Result<Response> {
        self.execute::<serde_json::Value>(request, Decode::None)
            .await
    }

    /// Build, send and decode in one step.
    ///
    /// This is what every endpoint method does; it is public so endpoints not
    /// wrapped by this crate can be called the same way.
    pub async fn call<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(T, Response)>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + ?Sized + Sync,
    {
        let request = self.new_request(method, path, body)?;
        let mut value = T::default();
        let response = self.execute(request, Decode::Json(&mut value)).await?;
        Ok((value, response))
    }

    /// [`call`](Self::call) on behalf of a named service.
    pub(crate) async fn call_api<T, B>(
        &self,
        api: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(T, Response)>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + ?Sized + Sync,
    {
        debug!("[ActiveCampaign] {} {} {}", api, method, path);
        self.call(method, path, body).await
    }
}

/// Normalize a base URL so it ends with `/api/3/`.
///
/// # Errors
/// Returns `Error::Config` if `raw` is not an absolute URL.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| Error::Config(format!("invalid base_url {raw:?}: {e}")))?;

    let mut path = url.path().to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    if !path.ends_with(&format!("/{API_PREFIX}")) {
        path.push_str(API_PREFIX);
    }
    url.set_path(&path);

    Ok(url)
}

/// Classify a response by status code: 200-299 passes, everything else is
/// `Error::Api` carrying the response.
pub fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!(
        "[ActiveCampaign] {} returned status {}",
        response.url(),
        status.as_u16()
    );
    Err(Error::Api {
        status,
        response: Box::new(response),
    })
}

fn decode_into<T>(response: Response, target: Decode<'_, T>) -> Result<Response>
where
    T: DeserializeOwned,
{
    match target {
        Decode::None => {}
        Decode::Raw(buffer) => buffer.extend_from_slice(response.bytes()),
        Decode::Json(value) => {
            if response.bytes().iter().all(|b| is_json_whitespace(*b)) {
                return Ok(response);
            }
            // Only the first JSON value is read; trailing data is ignored.
            // A top-level `null` leaves the target as it was.
            let mut deserializer = serde_json::Deserializer::from_slice(response.bytes());
            match Option::<T>::deserialize(&mut deserializer) {
                Ok(Some(decoded)) => *value = decoded,
                Ok(None) => {}
                Err(source) => {
                    return Err(Error::Decode {
                        source,
                        response: Box::new(response),
                    })
                }
            }
        }
    }
    Ok(response)
}

fn resolve_path(base: &Url, path: &str) -> Result<Url> {
    let relative = path.trim_start_matches('/');
    let invalid = |reason: &str| Error::Url {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    // A colon in the first segment is read as a scheme delimiter.
    let first_segment_end = relative
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(relative.len());
    if let Some(colon) = relative[..first_segment_end].find(':') {
        let scheme = &relative[..colon];
        return Err(if is_valid_scheme(scheme) {
            invalid("absolute URLs are not allowed, use a path relative to the base URL")
        } else {
            invalid("missing protocol scheme")
        });
    }

    if relative.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(invalid("invalid control character in URL"));
    }

    // Escapes are checked in the path and fragment; the query is sent as is.
    let (rest, fragment) = relative.split_once('#').unwrap_or((relative, ""));
    let path_part = rest.split_once('?').map_or(rest, |(p, _)| p);
    if !has_valid_escapes(path_part) || !has_valid_escapes(fragment) {
        return Err(invalid("invalid URL escape"));
    }

    base.join(relative).map_err(|e| invalid(&e.to_string()))
}

fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(h), Some(l)) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()
            )
    })
}

fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Error body ActiveCampaign returns alongside most 4xx statuses.
///
/// Not decoded automatically; use `error.response().map(|r| r.json::<ApiMessage>())`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}
