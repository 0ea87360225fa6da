use reqwest::StatusCode;
use thiserror::Error;
use tower::BoxError;

use crate::response::Response;

/// ActiveCampaign SDK error types
///
/// `Api` and `Decode` carry the buffered [`Response`] so callers can still
/// inspect the status, headers and body after the call failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request path {path:?}: {reason}")]
    Url { path: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[source] BoxError),

    #[error(
        "Request failed. Please analyze the request body for more details. Status code: {}",
        .status.as_u16()
    )]
    Api {
        status: StatusCode,
        response: Box<Response>,
    },

    #[error("JSON decode error: {source}")]
    Decode {
        source: serde_json::Error,
        response: Box<Response>,
    },
}

impl Error {
    /// The response that came back with this error, if the request got that far.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Api { response, .. } | Error::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Consume the error and take ownership of its response.
    pub fn into_response(self) -> Option<Response> {
        match self {
            Error::Api { response, .. } | Error::Decode { response, .. } => Some(*response),
            _ => None,
        }
    }

    /// HTTP status of the attached response.
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(Response::status)
    }
}

/// Result type alias for ActiveCampaign operations.
pub type Result<T> = std::result::Result<T, Error>;
