//! Custom field values
//!
//! ActiveCampaign files these under the contacts API, so the operations live
//! on [`ContactsApi`].

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::contacts::{ContactRecord, ContactsApi};
use super::ActiveCampaignApi;
use crate::error::Result;
use crate::response::Response;

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldValueLinks {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub field: String,
}

/// A custom field value and the contact it is attached to.
///
/// `field` and `value` are free-form: the API accepts ids as strings or
/// numbers and values of any JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub field: Value,
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<FieldValueLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub owner: Value,
}

impl FieldValue {
    pub fn new(contact: impl Into<String>, field: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            contact: contact.into(),
            field: field.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

/// Request body for `POST fieldValues`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomFieldValueRequest {
    #[serde(rename = "fieldValue")]
    pub field_value: FieldValue,
}

/// Response body for `POST fieldValues`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCustomFieldValueResponse {
    pub contacts: Option<Vec<ContactRecord>>,
    #[serde(rename = "fieldValue")]
    pub field_value: Option<FieldValue>,
}

impl ContactsApi {
    /// Set a custom field value on a contact.
    pub async fn create_custom_field_value(
        &self,
        request: &CreateCustomFieldValueRequest,
    ) -> Result<(CreateCustomFieldValueResponse, Response)> {
        self.client
            .call_api(self.api_name(), Method::POST, "fieldValues", Some(request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_required_fields_only() {
        let request = CreateCustomFieldValueRequest {
            field_value: FieldValue::new("1", "2", "Lorem Ipsum"),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"fieldValue":{"contact":"1","field":"2","value":"Lorem Ipsum"}}"#
        );
    }

    #[test]
    fn test_numeric_field_id() {
        let value = FieldValue::new("1", 2, true);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["field"], 2);
        assert_eq!(json["value"], true);
    }

    #[test]
    fn test_response_with_null_links_and_contacts() {
        let json = r##"{
            "contacts": null,
            "fieldValue": {
                "contact": "1",
                "field": "2",
                "value": "v",
                "cdate": "2020-06-24T15:30:54-05:00",
                "udate": "2020-06-24T15:30:54-05:00",
                "links": null,
                "owner": "#",
                "id": "10"
            }
        }"##;
        let response: CreateCustomFieldValueResponse = serde_json::from_str(json).unwrap();
        assert!(response.contacts.is_none());

        let field_value = response.field_value.unwrap();
        assert_eq!(field_value.id.as_deref(), Some("10"));
        assert_eq!(field_value.owner, Value::from("#"));
        assert!(field_value.links.is_none());
    }
}
