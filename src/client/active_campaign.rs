//! Unified ActiveCampaign client

use std::sync::Arc;

use crate::api::contacts::ContactsApi;
use crate::api::tags::TagsApi;
use crate::error::Result;

use super::active_campaign_client::{ActiveCampaignClient, ClientOptions};
use super::builder::ActiveCampaignBuilder;

/// Unified ActiveCampaign client
///
/// The main entry point of the SDK. Owns the client core and hands out the
/// endpoint services, which share it.
///
/// # Example
///
/// ```rust,ignore
/// use active_campaign_sdk::ActiveCampaign;
/// use active_campaign_sdk::api::{Contact, CreateContactRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ac = ActiveCampaign::builder()
///         .base_url("https://youraccount.api-us1.com")
///         .token("your_api_token")
///         .build()?;
///
///     let request = CreateContactRequest::from(Contact::new("jane@example.com"));
///     let (created, _response) = ac.contacts().create(&request).await?;
///     println!("{:?}", created.contact.map(|c| c.id));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ActiveCampaign {
    client: Arc<ActiveCampaignClient>,
    contacts: ContactsApi,
    tags: TagsApi,
}

impl ActiveCampaign {
    pub fn builder() -> ActiveCampaignBuilder {
        ActiveCampaignBuilder::default()
    }

    /// Create a client from plain options.
    ///
    /// # Errors
    /// Returns `Error::Config` if the base URL or token is invalid.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Ok(Self::from(Arc::new(ActiveCampaignClient::new(options)?)))
    }

    /// The shared client core, for requests the services do not cover.
    pub fn client(&self) -> &ActiveCampaignClient {
        &self.client
    }

    pub fn contacts(&self) -> &ContactsApi {
        &self.contacts
    }

    pub fn tags(&self) -> &TagsApi {
        &self.tags
    }
}

impl From<Arc<ActiveCampaignClient>> for ActiveCampaign {
    fn from(client: Arc<ActiveCampaignClient>) -> Self {
        Self {
            contacts: ContactsApi::new(Arc::clone(&client)),
            tags: TagsApi::new(Arc::clone(&client)),
            client,
        }
    }
}
