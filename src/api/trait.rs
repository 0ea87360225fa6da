//! ActiveCampaign API trait
//!
//! Provides the base trait shared by the endpoint services.

use crate::client::ActiveCampaignClient;

/// Trait for ActiveCampaign endpoint services.
///
/// Every service holds a shared handle to the client core, injected at
/// construction.
pub trait ActiveCampaignApi: Send + Sync {
    /// Get a reference to the client core
    fn client(&self) -> &ActiveCampaignClient;

    /// Get the name of this API for logging.
    fn api_name(&self) -> &'static str {
        "unknown"
    }
}
