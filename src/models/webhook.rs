//! Webhook subscription models.
//!
//! Only registering and reading subscriptions is covered; receiving the
//! events Mailchimp pushes is left to the application.

use serde::{Deserialize, Serialize};

use super::primitives::{ListId, WebhookId};
use super::validate::{self, missing, Validate};

/// Which list events trigger the webhook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvents {
    /// A member subscribed
    #[serde(default)]
    pub subscribe: bool,
    /// A member unsubscribed
    #[serde(default)]
    pub unsubscribe: bool,
    /// A member's profile was updated
    #[serde(default)]
    pub profile: bool,
    /// An address was cleaned
    #[serde(default)]
    pub cleaned: bool,
    /// A member changed their email address
    #[serde(default)]
    pub upemail: bool,
    /// A campaign was sent or cancelled
    #[serde(default)]
    pub campaign: bool,
}

impl WebhookEvents {
    /// Every event type enabled.
    pub fn all() -> Self {
        Self {
            subscribe: true,
            unsubscribe: true,
            profile: true,
            cleaned: true,
            upemail: true,
            campaign: true,
        }
    }
}

/// Which actors' changes trigger the webhook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSources {
    /// Changes made by subscribers
    #[serde(default)]
    pub user: bool,
    /// Changes made by account admins
    #[serde(default)]
    pub admin: bool,
    /// Changes made through the API
    #[serde(default)]
    pub api: bool,
}

impl WebhookSources {
    /// Every source enabled.
    pub fn all() -> Self {
        Self {
            user: true,
            admin: true,
            api: true,
        }
    }
}

/// A push-notification subscription on a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Server-assigned webhook id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WebhookId>,
    /// URL Mailchimp posts events to
    #[serde(default)]
    pub url: String,
    /// Enabled event types
    #[serde(default)]
    pub events: WebhookEvents,
    /// Enabled sources
    #[serde(default)]
    pub sources: WebhookSources,
    /// Owning list
    #[serde(default)]
    pub list_id: ListId,
}

impl Validate for Webhook {
    fn missing_fields(&self) -> Vec<String> {
        missing([
            ("url", self.url.as_str()),
            ("list_id", self.list_id.as_str()),
        ])
    }
}

/// Builder for webhooks with validation.
///
/// # Example
///
/// ```
/// use mailchimp_rs::models::{WebhookBuilder, WebhookEvents, WebhookSources};
///
/// let webhook = WebhookBuilder::new()
///     .url("https://example.com/hooks/mailchimp")
///     .list_id("57afe96172")
///     .events(WebhookEvents { subscribe: true, ..Default::default() })
///     .sources(WebhookSources::all())
///     .build()
///     .expect("url and list id set");
/// assert!(webhook.events.subscribe);
/// ```
#[derive(Debug, Default, Clone)]
pub struct WebhookBuilder {
    webhook: Webhook,
}

impl WebhookBuilder {
    /// Create a new webhook builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.webhook.url = url.into();
        self
    }

    /// Set the enabled event types.
    pub fn events(mut self, events: WebhookEvents) -> Self {
        self.webhook.events = events;
        self
    }

    /// Set the enabled sources.
    pub fn sources(mut self, sources: WebhookSources) -> Self {
        self.webhook.sources = sources;
        self
    }

    /// Set the owning list.
    pub fn list_id(mut self, list_id: impl Into<ListId>) -> Self {
        self.webhook.list_id = list_id.into();
        self
    }

    /// Build the webhook, failing if the URL or list id is unset.
    pub fn build(self) -> crate::Result<Webhook> {
        validate::check("webhook", self.webhook)
    }
}
