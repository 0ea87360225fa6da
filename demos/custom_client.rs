//! Custom transport configuration
//!
//! Run with: cargo run --example custom_client
//!
//! The client is built without a token; the `Api-Token` header is set by a
//! middleware layer instead, next to request logging.

use std::time::Duration;

use active_campaign_sdk::middleware::{HeaderMiddleware, LoggingMiddleware, ServiceBuilder};
use active_campaign_sdk::{ActiveCampaign, Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::var("ACTIVE_CAMPAIGN_BASE_URL")?;
    let token = std::env::var("ACTIVE_CAMPAIGN_TOKEN")?;

    let stack = ServiceBuilder::new()
        .layer(LoggingMiddleware::new())
        .layer(
            HeaderMiddleware::new()
                .header("Api-Token", &token)?
                .header("User-Agent", "custom-client-demo/0.1")?,
        )
        .into_inner();

    let ac = ActiveCampaign::builder()
        .base_url(base_url)
        .timeout(Duration::from_secs(10))
        .with_middleware(stack)
        .build()?;

    match ac.tags().list_all().await {
        Ok((tags, _)) => println!("{} tags", tags.tags.len()),
        Err(Error::Api { status, response }) => {
            eprintln!("API error {}: {}", status, response.text());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
