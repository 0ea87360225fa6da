//! Mock API Tests using WireMock
//!
//! These tests mock the ActiveCampaign API to verify request bodies, headers
//! and response parsing without making real network calls.

use active_campaign_sdk::api::{
    AddTagToContactRequest, Contact, ContactList, ContactTag, CreateContactRequest,
    CreateCustomFieldValueRequest, CreateTagRequest, FieldValue, Tag,
    UpdateListStatusForContactRequest,
};
use active_campaign_sdk::ActiveCampaign;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token-12345";

/// Create a client pointing to the mock server
fn create_test_client(mock_server: &MockServer) -> ActiveCampaign {
    ActiveCampaign::builder()
        .base_url(mock_server.uri())
        .token(TOKEN)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_mock_create_contact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3/contacts"))
        .and(header("Api-Token", TOKEN))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"contact": {"email": "e"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "contact": {
                "email": "e",
                "cdate": "2020-06-24T15:30:54-05:00",
                "udate": "2020-06-24T15:30:54-05:00",
                "orgid": "",
                "orgname": "",
                "links": {
                    "bounceLogs": "https://account.api-us1.com/api/3/contacts/1/bounceLogs"
                },
                "id": "1",
                "organization": null
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    let request = CreateContactRequest::from(Contact::new("e"));
    let (created, response) = ac.contacts().create(&request).await.unwrap();

    assert_eq!(response.status().as_u16(), 201);
    let contact = created.contact.unwrap();
    assert_eq!(contact.email, "e");
    assert_eq!(contact.id, "1");
    assert!(contact.organization.is_none());
    assert_eq!(
        contact.links.unwrap().bounce_logs,
        "https://account.api-us1.com/api/3/contacts/1/bounceLogs"
    );
}

#[tokio::test]
async fn test_mock_update_list_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3/contactLists"))
        .and(body_json(json!({
            "contactList": {"list": "2", "contact": "1", "status": "1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contacts": [{"email": "e", "id": "1", "email_empty": false}],
            "contactList": {
                "contact": "1",
                "list": "2",
                "status": 1,
                "form": null,
                "links": null,
                "id": "5"
            }
        })))
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    let request = UpdateListStatusForContactRequest {
        contact_list: ContactList::new("2", "1", "1"),
    };
    let (updated, _) = ac.contacts().update_list_status(&request).await.unwrap();

    let contacts = updated.contacts.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "e");
    let contact_list = updated.contact_list.unwrap();
    assert_eq!(contact_list.id, "5");
    assert_eq!(contact_list.status, json!(1));
    assert!(contact_list.form.is_null());
    assert!(contact_list.links.is_none());
}

#[tokio::test]
async fn test_mock_update_list_status_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3/contactLists"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    let request = UpdateListStatusForContactRequest {
        contact_list: ContactList::new("2", "1", "2"),
    };
    let (updated, _) = ac.contacts().update_list_status(&request).await.unwrap();

    assert!(updated.contacts.is_none());
    assert!(updated.contact_list.is_none());
}

#[tokio::test]
async fn test_mock_add_tag_to_contact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3/contactTags"))
        .and(body_json(json!({"contactTag": {"contact": "1", "tag": "20"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "contactTag": {
                "cdate": "2017-06-08T16:11:53-05:00",
                "contact": "1",
                "id": "1",
                "links": {
                    "contact": "/1/contact",
                    "tag": "/1/tag"
                },
                "tag": "20"
            }
        })))
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    let request = AddTagToContactRequest {
        contact_tag: ContactTag::new("1", "20"),
    };
    let (added, _) = ac.contacts().add_tag(&request).await.unwrap();

    let contact_tag = added.contact_tag.unwrap();
    assert_eq!(contact_tag.id.as_deref(), Some("1"));
    assert_eq!(contact_tag.tag, "20");
    assert_eq!(contact_tag.links.unwrap().contact, "/1/contact");
}

#[tokio::test]
async fn test_mock_create_custom_field_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3/fieldValues"))
        .and(body_json(json!({
            "fieldValue": {"contact": "1", "field": "2", "value": "Lorem Ipsum"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contacts": [{"email": "e", "id": "1"}],
            "fieldValue": {
                "contact": "1",
                "field": "2",
                "value": "Lorem Ipsum",
                "cdate": "2020-06-24T15:30:54-05:00",
                "udate": "2020-06-24T15:30:54-05:00",
                "links": {"owner": "/1/owner", "field": "/1/field"},
                "id": "11",
                "owner": "1"
            }
        })))
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    let request = CreateCustomFieldValueRequest {
        field_value: FieldValue::new("1", "2", "Lorem Ipsum"),
    };
    let (created, _) = ac
        .contacts()
        .create_custom_field_value(&request)
        .await
        .unwrap();

    let field_value = created.field_value.unwrap();
    assert_eq!(field_value.id.as_deref(), Some("11"));
    assert_eq!(field_value.value, json!("Lorem Ipsum"));
    assert_eq!(field_value.links.unwrap().field, "/1/field");
    assert_eq!(created.contacts.unwrap()[0].id, "1");
}

#[tokio::test]
async fn test_mock_create_tag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3/tags"))
        .and(body_json(json!({
            "tag": {"tag": "VIP", "tagType": "contact", "description": "big spenders"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "tag": {
                "tag": "VIP",
                "description": "big spenders",
                "tagType": "contact",
                "cdate": "2018-09-29T19:21:25-05:00",
                "links": {"contactGoalTags": "/1/contactGoalTags"},
                "id": "16"
            }
        })))
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    let request = CreateTagRequest {
        tag: Tag::new("VIP", "contact").description("big spenders"),
    };
    let (created, _) = ac.tags().create(&request).await.unwrap();

    let tag = created.tag.unwrap();
    assert_eq!(tag.id, "16");
    assert_eq!(tag.tag_type, "contact");
    assert_eq!(tag.links.unwrap().contact_goal_tags, "/1/contactGoalTags");
}

#[tokio::test]
async fn test_mock_create_empty_tag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3/tags"))
        .and(body_json(json!({"tag": {}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "tag": {"tag": "", "tagType": "", "id": "17"}
        })))
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    let (created, _) = ac.tags().create(&CreateTagRequest::default()).await.unwrap();

    assert_eq!(created.tag.unwrap().id, "17");
}

#[tokio::test]
async fn test_mock_list_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/tags"))
        .and(header("Api-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tags": [
                {"tag": "one", "tagType": "contact", "id": "1"},
                {"tag": "two", "tagType": "template", "id": "2"}
            ],
            "meta": {"total": "2"}
        })))
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    let (tags, response) = ac.tags().list_all().await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(tags.tags.len(), 2);
    assert_eq!(tags.tags[1].tag, "two");
    assert_eq!(tags.meta.unwrap().total, "2");
}

#[tokio::test]
async fn test_mock_list_tags_sends_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ac = create_test_client(&mock_server);
    ac.tags().list_all().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert_eq!(requests[0].headers.get("api-token").unwrap(), TOKEN);
}

#[tokio::test]
async fn test_mock_base_url_already_has_api_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ac = ActiveCampaign::builder()
        .base_url(format!("{}/api/3", mock_server.uri()))
        .token(TOKEN)
        .build()
        .unwrap();

    ac.tags().list_all().await.unwrap();
}
