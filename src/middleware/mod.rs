//! Middleware components for the ActiveCampaign SDK.
//!
//! Tower layers over the default `reqwest::Client` transport, installed with
//! [`ActiveCampaignBuilder::with_middleware`](crate::ActiveCampaignBuilder::with_middleware).
//!
//! ## Middleware Types
//!
//! - [`HeaderMiddleware`] - Sets fixed headers on every request
//! - [`LoggingMiddleware`] - Logs request/response information
//!
//! ## Usage
//!
//! ```ignore
//! use tower::ServiceBuilder;
//! use active_campaign_sdk::ActiveCampaign;
//! use active_campaign_sdk::middleware::{HeaderMiddleware, LoggingMiddleware};
//!
//! let stack = ServiceBuilder::new()
//!     .layer(LoggingMiddleware::new())
//!     .layer(HeaderMiddleware::new().header("User-Agent", "my-app/1.0")?)
//!     .into_inner();
//!
//! let ac = ActiveCampaign::builder()
//!     .base_url("https://youraccount.api-us1.com")
//!     .token("your_api_token")
//!     .with_middleware(stack)
//!     .build()?;
//! ```

// Re-export tower types for convenience
pub use tower::{Layer, Service, ServiceBuilder};

mod header;
mod logging;

pub use header::{HeaderMiddleware, HeaderMiddlewareService};
pub use logging::{LoggingMiddleware, LoggingMiddlewareService};
