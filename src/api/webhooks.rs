//! Webhooks service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::ClientInner;
use crate::models::{ListId, Webhook, WebhookEvents, WebhookId, WebhookSources};
use crate::Result;

/// Service for webhook subscriptions on lists.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: mailchimp_rs::MailchimpClient) -> mailchimp_rs::Result<()> {
/// use mailchimp_rs::models::{WebhookBuilder, WebhookEvents, WebhookSources};
///
/// let webhook = WebhookBuilder::new()
///     .url("https://example.com/hooks/mailchimp")
///     .list_id("57afe96172")
///     .events(WebhookEvents::all())
///     .sources(WebhookSources { user: true, admin: true, api: false })
///     .build()?;
///
/// let created = client.webhooks().create(&webhook).await?;
/// println!("registered webhook {:?}", created.id);
/// # Ok(())
/// # }
/// ```
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Register a webhook on the list named by `webhook.list_id`.
    pub async fn create(&self, webhook: &Webhook) -> Result<Webhook> {
        #[derive(Serialize)]
        struct Request<'a> {
            url: &'a str,
            events: WebhookEvents,
            sources: WebhookSources,
        }

        self.inner
            .post(
                &format!("/lists/{}/webhooks", webhook.list_id.path_segment()),
                &Request {
                    url: &webhook.url,
                    events: webhook.events,
                    sources: webhook.sources,
                },
            )
            .await
    }

    /// Get every webhook registered on a list.
    pub async fn list(&self, list_id: &ListId) -> Result<Vec<Webhook>> {
        #[derive(Deserialize)]
        struct Response {
            webhooks: Vec<Webhook>,
        }

        let response: Response = self
            .inner
            .get(&format!("/lists/{}/webhooks", list_id.path_segment()))
            .await?;
        Ok(response.webhooks)
    }

    /// Get a webhook by id.
    pub async fn get(&self, list_id: &ListId, webhook_id: &WebhookId) -> Result<Webhook> {
        self.inner
            .get(&format!(
                "/lists/{}/webhooks/{}",
                list_id.path_segment(),
                webhook_id.path_segment()
            ))
            .await
    }

    /// Remove a webhook.
    pub async fn delete(&self, list_id: &ListId, webhook_id: &WebhookId) -> Result<()> {
        self.inner
            .delete(&format!(
                "/lists/{}/webhooks/{}",
                list_id.path_segment(),
                webhook_id.path_segment()
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WebhookBuilder;
    use crate::test_utils::MockTransport;
    use crate::{Error, MailchimpClient};
    use serde_json::json;

    fn webhook_json() -> serde_json::Value {
        json!({
            "id": "wh1",
            "url": "https://example.com/hook",
            "events": {"subscribe": true, "unsubscribe": true},
            "sources": {"api": true},
            "list_id": "list1"
        })
    }

    #[tokio::test]
    async fn test_create_webhook() {
        let mock = MockTransport::new().with_json(webhook_json());
        let client = MailchimpClient::with_transport(mock.clone());
        let webhook = WebhookBuilder::new()
            .url("https://example.com/hook")
            .list_id("list1")
            .events(WebhookEvents {
                subscribe: true,
                unsubscribe: true,
                ..Default::default()
            })
            .sources(WebhookSources {
                api: true,
                ..Default::default()
            })
            .build()
            .unwrap();

        let created = client.webhooks().create(&webhook).await.unwrap();

        assert_eq!(created.id, Some(WebhookId::new("wh1")));
        let requests = mock.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/lists/list1/webhooks");
        assert_eq!(
            requests[0].body,
            Some(json!({
                "url": "https://example.com/hook",
                "events": {"subscribe": true, "unsubscribe": true, "profile": false,
                           "cleaned": false, "upemail": false, "campaign": false},
                "sources": {"user": false, "admin": false, "api": true}
            }))
        );
    }

    #[tokio::test]
    async fn test_list_and_get_webhooks() {
        let mock = MockTransport::new()
            .with_json(json!({"webhooks": [webhook_json()], "list_id": "list1", "total_items": 1}))
            .with_json(webhook_json());
        let client = MailchimpClient::with_transport(mock.clone());
        let list_id = ListId::new("list1");

        let webhooks = client.webhooks().list(&list_id).await.unwrap();
        let webhook = client
            .webhooks()
            .get(&list_id, &WebhookId::new("wh1"))
            .await
            .unwrap();

        assert_eq!(webhooks.len(), 1);
        assert_eq!(webhooks[0], webhook);
        let requests = mock.requests();
        assert_eq!(requests[0].path, "/lists/list1/webhooks");
        assert_eq!(requests[1].path, "/lists/list1/webhooks/wh1");
    }

    #[tokio::test]
    async fn test_delete_webhook() {
        let mock = MockTransport::new();
        let client = MailchimpClient::with_transport(mock.clone());

        client
            .webhooks()
            .delete(&ListId::new("list1"), &WebhookId::new("wh1"))
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/lists/list1/webhooks/wh1");
    }

    #[tokio::test]
    async fn test_list_webhooks_decode_failure() {
        let mock = MockTransport::new().with_json(json!({"hooks": []}));
        let client = MailchimpClient::with_transport(mock);

        let err = client
            .webhooks()
            .list(&ListId::new("list1"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
