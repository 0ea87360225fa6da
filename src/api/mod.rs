//! ActiveCampaign API modules
//!
//! - [`contacts`] - Contacts, list subscriptions and contact tags
//! - [`custom_field_values`] - Custom field values on contacts
//! - [`tags`] - Tags
//!
//! Each service holds an `Arc` of the [`ActiveCampaignClient`](crate::client::ActiveCampaignClient)
//! and every method is a single request: build, execute, decode. Methods return
//! the decoded body together with the [`Response`](crate::Response).

pub mod contacts;
pub mod custom_field_values;
pub mod tags;
pub mod r#trait;

pub use contacts::{
    AddTagToContactRequest, AddTagToContactResponse, Contact, ContactLinks, ContactList,
    ContactListLinks, ContactListRecord, ContactRecord, ContactTag, ContactTagLinks, ContactsApi,
    CreateContactRequest, CreateContactResponse, CreatedContact, UpdateContactListStatusResponse,
    UpdateListStatusForContactRequest,
};
pub use custom_field_values::{
    CreateCustomFieldValueRequest, CreateCustomFieldValueResponse, FieldValue, FieldValueLinks,
};
pub use r#trait::ActiveCampaignApi;
pub use tags::{
    CreateTagRequest, CreateTagResponse, CreatedTag, ListMeta, ListTagsResponse, Tag, TagLinks,
    TagsApi,
};
