//! Tags API
//!
//! Tags are labels applied to contacts to organize them.
//!
//! ActiveCampaign API docs: <https://developers.activecampaign.com/reference#tags>

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ActiveCampaignApi;
use crate::client::ActiveCampaignClient;
use crate::error::Result;
use crate::response::Response;

/// A tag as sent when creating one. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "tagType", default, skip_serializing_if = "Option::is_none")]
    pub tag_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Tag {
    pub fn new(tag: impl Into<String>, tag_type: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            tag_type: Some(tag_type.into()),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request body for `POST tags`
///
/// An empty [`Tag`] is accepted by the API, but `tagType` is unique so it
/// only works once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub tag: Tag,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagLinks {
    pub contact_goal_tags: String,
}

/// A tag as returned by the API
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedTag {
    pub tag: String,
    pub description: String,
    #[serde(rename = "tagType")]
    pub tag_type: String,
    pub cdate: String,
    pub links: Option<TagLinks>,
    pub id: String,
}

/// Response body for `POST tags`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTagResponse {
    #[serde(default)]
    pub tag: Option<CreatedTag>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMeta {
    pub total: String,
}

/// Response body for `GET tags`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTagsResponse {
    pub tags: Vec<CreatedTag>,
    pub meta: Option<ListMeta>,
}

/// Tags API
#[derive(Debug, Clone)]
pub struct TagsApi {
    client: Arc<ActiveCampaignClient>,
}

impl TagsApi {
    pub fn new(client: Arc<ActiveCampaignClient>) -> Self {
        Self { client }
    }

    /// Create a tag.
    pub async fn create(&self, request: &CreateTagRequest) -> Result<(CreateTagResponse, Response)> {
        self.client
            .call_api(self.api_name(), Method::POST, "tags", Some(request))
            .await
    }

    /// List tags.
    ///
    /// Returns the first page the server sends; no further pages are
    /// requested.
    pub async fn list_all(&self) -> Result<(ListTagsResponse, Response)> {
        self.client
            .call_api::<_, ()>(self.api_name(), Method::GET, "tags", None)
            .await
    }
}

impl ActiveCampaignApi for TagsApi {
    fn client(&self) -> &ActiveCampaignClient {
        &self.client
    }

    fn api_name(&self) -> &'static str {
        "tags"
    }
}
