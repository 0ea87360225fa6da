//! Basic usage example for active-campaign-sdk
//!
//! Run with: cargo run --example basic_usage
//!
//! Reads ACTIVE_CAMPAIGN_BASE_URL and ACTIVE_CAMPAIGN_TOKEN from the
//! environment.

use active_campaign_sdk::api::{
    AddTagToContactRequest, Contact, ContactList, ContactTag, CreateContactRequest,
    CreateCustomFieldValueRequest, CreateTagRequest, FieldValue, Tag,
    UpdateListStatusForContactRequest,
};
use active_campaign_sdk::{ActiveCampaign, ClientOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ac = ActiveCampaign::new(ClientOptions::from_env()?)?;
    println!("Client created for {}", ac.client().base_url());

    let mut contact = Contact::new("jane@example.com");
    contact.first_name = Some("Jane".to_string());
    let (created, _) = ac
        .contacts()
        .create(&CreateContactRequest::from(contact))
        .await?;
    let contact_id = created.contact.map(|c| c.id).unwrap_or_default();
    println!("Created contact {contact_id}");

    let (_, response) = ac
        .contacts()
        .update_list_status(&UpdateListStatusForContactRequest {
            contact_list: ContactList::new("1", contact_id.as_str(), "1"),
        })
        .await?;
    println!("Subscribed to list 1: {}", response.status());

    let (tag, _) = ac
        .tags()
        .create(&CreateTagRequest {
            tag: Tag::new("newsletter", "contact").description("Newsletter readers"),
        })
        .await?;
    let tag_id = tag.tag.map(|t| t.id).unwrap_or_default();

    ac.contacts()
        .add_tag(&AddTagToContactRequest {
            contact_tag: ContactTag::new(contact_id.as_str(), tag_id),
        })
        .await?;

    ac.contacts()
        .create_custom_field_value(&CreateCustomFieldValueRequest {
            field_value: FieldValue::new(contact_id.as_str(), "1", "Gold"),
        })
        .await?;

    let (tags, _) = ac.tags().list_all().await?;
    for tag in &tags.tags {
        println!("{:>4} {}", tag.id, tag.tag);
    }

    Ok(())
}
