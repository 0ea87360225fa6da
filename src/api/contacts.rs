//! Contacts API
//!
//! ActiveCampaign API docs: <https://developers.activecampaign.com/reference#contact>

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ActiveCampaignApi;
use crate::client::ActiveCampaignClient;
use crate::error::Result;
use crate::response::Response;

/// A contact as sent when creating one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Contact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Request body for `POST contacts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateContactRequest {
    pub contact: Contact,
}

impl From<Contact> for CreateContactRequest {
    fn from(contact: Contact) -> Self {
        Self { contact }
    }
}

/// Resource links attached to a contact.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactLinks {
    pub bounce_logs: String,
    pub contact_automations: String,
    pub contact_data: String,
    pub contact_goals: String,
    pub contact_lists: String,
    pub contact_logs: String,
    pub contact_tags: String,
    pub contact_deals: String,
    pub deals: String,
    pub field_values: String,
    pub geo_ips: String,
    pub notes: String,
    pub organization: String,
    pub plus_append: String,
    pub tracking_logs: String,
    pub score_values: String,
    pub account_contacts: String,
    pub automation_entry_counts: String,
}

/// The contact returned by `POST contacts`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedContact {
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub cdate: String,
    pub udate: String,
    pub orgid: String,
    pub orgname: String,
    pub links: Option<ContactLinks>,
    pub id: String,
    pub organization: Option<String>,
}

/// Response body for `POST contacts`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateContactResponse {
    #[serde(default)]
    pub contact: Option<CreatedContact>,
}

/// A full contact record, as embedded in `contacts` arrays of other
/// responses.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub cdate: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub orgid: String,
    pub orgname: String,
    pub segmentio_id: String,
    pub bounced_hard: String,
    pub bounced_soft: String,
    pub bounced_date: Option<String>,
    pub ip: String,
    pub ua: String,
    pub hash: String,
    pub socialdata_lastcheck: Option<String>,
    pub email_local: String,
    pub email_domain: String,
    pub sentcnt: String,
    pub rating_tstamp: Option<String>,
    pub gravatar: String,
    pub deleted: String,
    pub anonymized: String,
    pub adate: Option<String>,
    pub udate: String,
    pub edate: Value,
    pub deleted_at: Option<String>,
    pub created_utc_timestamp: String,
    pub updated_utc_timestamp: String,
    pub created_timestamp: String,
    pub updated_timestamp: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub email_empty: bool,
    #[serde(rename = "accountContacts")]
    pub account_contacts: Vec<Value>,
    pub links: Option<ContactLinks>,
    pub id: String,
    pub organization: Value,
}

/// Subscription of a contact to a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactList {
    pub list: String,
    pub contact: String,
    /// `"1"` to subscribe, `"2"` to unsubscribe
    pub status: String,
}

impl ContactList {
    pub fn new(
        list: impl Into<String>,
        contact: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            list: list.into(),
            contact: contact.into(),
            status: status.into(),
        }
    }
}

/// Request body for `POST contactLists`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateListStatusForContactRequest {
    #[serde(rename = "contactList")]
    pub contact_list: ContactList,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactListLinks {
    pub automation: String,
    pub list: String,
    pub contact: String,
    pub form: String,
    pub autosync_log: String,
    pub campaign: String,
    pub unsubscribe_automation: String,
    pub message: String,
}

/// The list membership returned by `POST contactLists`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactListRecord {
    pub contact: String,
    pub list: String,
    pub form: Value,
    pub seriesid: String,
    pub sdate: String,
    pub udate: Value,
    /// String or number depending on whether the contact was already on the list
    pub status: Value,
    pub responder: String,
    pub sync: String,
    pub unsubreason: String,
    pub campaign: Value,
    pub message: Value,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "ip4Sub")]
    pub ip4_sub: String,
    /// A number when the contact was not a member of the list yet, a string
    /// otherwise
    pub sourceid: Value,
    #[serde(rename = "autosyncLog")]
    pub autosync_log: Value,
    pub ip4_last: String,
    #[serde(rename = "ip4Unsub")]
    pub ip4_unsub: String,
    pub created_timestamp: String,
    pub updated_timestamp: String,
    pub created_by: Value,
    pub updated_by: Value,
    #[serde(rename = "unsubscribeAutomation")]
    pub unsubscribe_automation: Value,
    pub links: Option<ContactListLinks>,
    pub id: String,
    pub automation: Value,
}

/// Response body for `POST contactLists`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateContactListStatusResponse {
    pub contacts: Option<Vec<ContactRecord>>,
    #[serde(rename = "contactList")]
    pub contact_list: Option<ContactListRecord>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactTagLinks {
    pub tag: String,
    pub contact: String,
}

/// Association between a contact and a tag.
///
/// Only `contact` and `tag` are sent when creating one; the rest is filled
/// in by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactTag {
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ContactTagLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ContactTag {
    pub fn new(contact: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            tag: tag.into(),
            ..Self::default()
        }
    }
}

/// Request body for `POST contactTags`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddTagToContactRequest {
    #[serde(rename = "contactTag")]
    pub contact_tag: ContactTag,
}

/// Response body for `POST contactTags`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddTagToContactResponse {
    #[serde(rename = "contactTag", default)]
    pub contact_tag: Option<ContactTag>,
}

/// Contacts API
///
/// Also hosts the custom field value operations, which ActiveCampaign files
/// under contacts.
#[derive(Debug, Clone)]
pub struct ContactsApi {
    pub(super) client: Arc<ActiveCampaignClient>,
}

impl ContactsApi {
    pub fn new(client: Arc<ActiveCampaignClient>) -> Self {
        Self { client }
    }

    /// Create a contact.
    pub async fn create(
        &self,
        request: &CreateContactRequest,
    ) -> Result<(CreateContactResponse, Response)> {
        self.client
            .call_api(self.api_name(), Method::POST, "contacts", Some(request))
            .await
    }

    /// Subscribe a contact to a list, or unsubscribe it.
    pub async fn update_list_status(
        &self,
        request: &UpdateListStatusForContactRequest,
    ) -> Result<(UpdateContactListStatusResponse, Response)> {
        self.client
            .call_api(self.api_name(), Method::POST, "contactLists", Some(request))
            .await
    }

    /// Attach a tag to a contact.
    pub async fn add_tag(
        &self,
        request: &AddTagToContactRequest,
    ) -> Result<(AddTagToContactResponse, Response)> {
        self.client
            .call_api(self.api_name(), Method::POST, "contactTags", Some(request))
            .await
    }
}

impl ActiveCampaignApi for ContactsApi {
    fn client(&self) -> &ActiveCampaignClient {
        &self.client
    }

    fn api_name(&self) -> &'static str {
        "contacts"
    }
}
