//! ActiveCampaign HTTP client module
//!
//! This module contains the client core, the unified facade and its builder.

mod active_campaign_client;
pub use active_campaign_client::{
    check_response, normalize_base_url, ActiveCampaignClient, ApiMessage, ClientOptions, Decode,
    API_PREFIX, API_TOKEN_HEADER,
};

mod active_campaign;
pub use active_campaign::ActiveCampaign;

mod builder;
pub use builder::ActiveCampaignBuilder;
