//! Integration tests for mailchimp-rs over HTTP.
//!
//! Every test runs the real [`HttpTransport`] against a local wiremock
//! server, so no Mailchimp account is needed.
//!
//! Run with: cargo test --test api_tests

use std::sync::Once;

use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mailchimp_rs::models::{MemberBuilder, Tag};
use mailchimp_rs::prelude::*;
use mailchimp_rs::HttpTransport;

static INIT: Once = Once::new();

const API_KEY: &str = "123456";
const AUTHORIZATION: &str = "Basic YW55c3RyaW5nOjEyMzQ1Ng==";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Create a client pointed at the mock server's `/3.0` root
fn client_for(server: &MockServer) -> MailchimpClient {
    init_logging();
    let credentials = Credentials::new(API_KEY, "us1").unwrap();
    let config = ClientConfig::new().with_base_url(format!("{}/3.0", server.uri()));
    MailchimpClient::with_config(credentials, config).unwrap()
}

// =============================================================================
// Transport
// =============================================================================

#[tokio::test]
async fn test_ping_sends_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/ping"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"health_status": "Everything's Chimpy!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).ping().await.unwrap();
}

#[tokio::test]
async fn test_ping_unexpected_greeting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"health_status": "Meh"})))
        .mount(&server)
        .await;

    let err = client_for(&server).ping().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedPing(ref status) if status == "Meh"));
}

#[tokio::test]
async fn test_user_agent_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/ping"))
        .and(header("user-agent", "newsletter-sync/2.1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"health_status": "Everything's Chimpy!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::new(API_KEY, "us1").unwrap();
    let config = ClientConfig::new()
        .with_user_agent("newsletter-sync/2.1")
        .with_base_url(format!("{}/3.0/", server.uri()));
    let transport = HttpTransport::new(&credentials, &config).unwrap();
    assert_eq!(transport.base_url(), format!("{}/3.0", server.uri()));

    MailchimpClient::with_transport(transport).ping().await.unwrap();
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    init_logging();
    let credentials = Credentials::new(API_KEY, "us1").unwrap();
    // Nothing listens on port 1
    let config = ClientConfig::new().with_base_url("http://127.0.0.1:1/3.0");
    let client = MailchimpClient::with_config(credentials, config).unwrap();

    let err = client.ping().await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert_eq!(err.status(), None);
    assert!(!err.is_local());
}

#[tokio::test]
async fn test_api_error_carries_detail_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "https://mailchimp.com/developer/marketing/docs/errors/",
            "title": "Resource Not Found",
            "status": 404,
            "detail": "The requested resource could not be found.",
            "instance": "995c5cb0-3280-4a6e-808b-3b096d0bb219"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lists()
        .get(&ListId::new("missing"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    let message = err.to_string();
    assert!(message.contains("The requested resource could not be found."));
    assert!(message.contains("404"));
    match err {
        Error::Api { title, instance, .. } => {
            assert_eq!(title.as_deref(), Some("Resource Not Found"));
            assert!(instance.is_some());
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_error_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).lists().list().await.unwrap_err();

    assert!(matches!(err, Error::UnparseableErrorResponse { status: 502 }));
    assert!(err.is_server_error());
}

#[tokio::test]
async fn test_any_2xx_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/3.0/lists/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .lists()
        .delete(&ListId::new("abc"))
        .await
        .unwrap();
}

// =============================================================================
// Members
// =============================================================================

#[tokio::test]
async fn test_batch_subscribe() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/lists/abc"))
        .and(body_json(json!({
            "members": [
                {"email_address": "jane@example.com", "status": "subscribed",
                 "merge_fields": {"FNAME": "Jane"}},
                {"email_address": "joe@example.com", "status": "pending"}
            ],
            "update_existing": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "new_members": [{"email_address": "jane@example.com", "status": "subscribed"}],
            "updated_members": [],
            "errors": [{"email_address": "joe@example.com",
                        "error": "joe@example.com looks fake or invalid",
                        "error_code": "ERROR_GENERIC"}],
            "total_created": 1,
            "total_updated": 0,
            "error_count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let members = vec![
        MemberBuilder::new()
            .email_address("jane@example.com")
            .subscribed()
            .merge_field("FNAME", "Jane")
            .build()
            .unwrap(),
        MemberBuilder::new()
            .email_address("joe@example.com")
            .pending()
            .build()
            .unwrap(),
    ];

    let summary = client_for(&server)
        .lists()
        .batch_subscribe(&ListId::new("abc"), &members)
        .await
        .unwrap();

    assert_eq!(summary.total_created, 1);
    assert_eq!(summary.error_count, 1);
    assert_eq!(summary.errors[0].email_address, "joe@example.com");
}

#[tokio::test]
async fn test_oversized_batch_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let members: Vec<Member> = (0..501)
        .map(|i| Member::new(format!("member{}@example.com", i)))
        .collect();

    let err = client_for(&server)
        .lists()
        .batch_upsert(&ListId::new("abc"), &members)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::TooManyMembers { count: 501, .. }));
}

#[tokio::test]
async fn test_update_tags_with_and_without_automations() {
    let server = MockServer::start().await;
    let tags_path = "/3.0/lists/abc/members/b642b4217b34b1e8d3bd915fc65c4452/tags";
    Mock::given(method("POST"))
        .and(path(tags_path))
        .and(body_partial_json(json!({"is_syncing": false})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(tags_path))
        .and(body_partial_json(json!({"is_syncing": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list_id = ListId::new("abc");
    let tags = [Tag::active("vip"), Tag::inactive("trial")];

    client
        .members()
        .update_tags(&list_id, "Test@Test.com", &tags)
        .await
        .unwrap();
    client
        .members()
        .update_tags_sync(&list_id, "test@test.com", &tags)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_archive_member() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(
            "/3.0/lists/abc/members/b642b4217b34b1e8d3bd915fc65c4452",
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .members()
        .archive(&ListId::new("abc"), "test@test.com")
        .await
        .unwrap();
}

// =============================================================================
// Webhooks and batches
// =============================================================================

#[tokio::test]
async fn test_create_webhook() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/lists/abc/webhooks"))
        .and(body_partial_json(json!({
            "url": "https://example.com/hook",
            "events": {"subscribe": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wh1",
            "url": "https://example.com/hook",
            "events": {"subscribe": true},
            "sources": {"api": true},
            "list_id": "abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let webhook = WebhookBuilder::new()
        .url("https://example.com/hook")
        .list_id("abc")
        .events(WebhookEvents {
            subscribe: true,
            ..Default::default()
        })
        .sources(WebhookSources {
            api: true,
            ..Default::default()
        })
        .build()
        .unwrap();

    let created = client_for(&server).webhooks().create(&webhook).await.unwrap();
    assert_eq!(created.id, Some(WebhookId::new("wh1")));
    assert_eq!(created.list_id, ListId::new("abc"));
}

#[tokio::test]
async fn test_submit_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/batches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "batch1",
            "status": "pending",
            "total_operations": 1,
            "finished_operations": 0,
            "errored_operations": 0,
            "submitted_at": "2024-05-01T10:00:00+00:00",
            "completed_at": "",
            "response_body_url": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let operation =
        Operation::update_member_tags(&ListId::new("abc"), "test@test.com", &[Tag::active("vip")])
            .unwrap();

    let status = client_for(&server)
        .batches()
        .submit(&[operation])
        .await
        .unwrap();

    assert_eq!(status.id, "batch1");
    assert!(status.completed_at.is_none());
    assert!(!status.is_finished());
}
