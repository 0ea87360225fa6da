//! ActiveCampaign SDK for Rust
//!
//! An async client for the ActiveCampaign v3 REST API.
//!
//! ## API Coverage
//!
//! | Service | Operation | Endpoint |
//! |---------|-----------|----------|
//! | Contacts | `create` | `POST contacts` |
//! | Contacts | `update_list_status` | `POST contactLists` |
//! | Contacts | `add_tag` | `POST contactTags` |
//! | Contacts | `create_custom_field_value` | `POST fieldValues` |
//! | Tags | `create` | `POST tags` |
//! | Tags | `list_all` | `GET tags` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use active_campaign_sdk::ActiveCampaign;
//! use active_campaign_sdk::api::{Contact, CreateContactRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ac = ActiveCampaign::builder()
//!         .base_url("https://youraccount.api-us1.com")
//!         .token("your_api_token")
//!         .build()?;
//!
//!     let request = CreateContactRequest::from(Contact::new("jane@example.com"));
//!     let (created, response) = ac.contacts().create(&request).await?;
//!     println!("{} -> {:?}", response.status(), created.contact);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Endpoint services and their request/response types
//! - [`client`] - Client core, facade and builder
//! - [`error`] - Error types
//! - [`middleware`] - Tower layers for the default transport
//! - [`response`] - Buffered HTTP response
//! - [`transport`] - Pluggable HTTP transport
//!
//! ## Error Handling
//!
//! Every failure is an [`Error`]. Failures that happen after a response
//! arrived still carry it, so the status and body stay inspectable:
//!
//! ```rust,ignore
//! use active_campaign_sdk::Error;
//!
//! match ac.tags().list_all().await {
//!     Ok((tags, _)) => println!("{} tags", tags.tags.len()),
//!     Err(Error::Api { status, response }) => {
//!         eprintln!("API error {}: {}", status, response.text());
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod middleware;
pub mod response;
pub mod transport;

pub use client::{ActiveCampaign, ActiveCampaignBuilder, ActiveCampaignClient, ClientOptions, Decode};
pub use error::{Error, Result};
pub use response::Response;
pub use transport::{ServiceTransport, Transport};
