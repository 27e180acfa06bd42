//! List (audience) models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::ListId;
use super::validate::{self, missing, nested, Validate};

/// Postal contact information shown in the footer of every campaign.
///
/// All fields except `address2` and `phone` are required by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Company or organization name
    #[serde(default)]
    pub company: String,
    /// Street address
    #[serde(default)]
    pub address1: String,
    /// Additional address line
    #[serde(default)]
    pub address2: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// State, province or region
    #[serde(default)]
    pub state: String,
    /// Postal code
    #[serde(default)]
    pub zip: String,
    /// Two-letter country code
    #[serde(default)]
    pub country: String,
    /// Phone number
    #[serde(default)]
    pub phone: String,
}

impl Validate for Contact {
    fn missing_fields(&self) -> Vec<String> {
        missing([
            ("address1", self.address1.as_str()),
            ("state", self.state.as_str()),
            ("zip", self.zip.as_str()),
            ("company", self.company.as_str()),
            ("city", self.city.as_str()),
            ("country", self.country.as_str()),
        ])
    }
}

/// Default values for campaigns created for a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDefaults {
    /// Sender name
    #[serde(default)]
    pub from_name: String,
    /// Sender (and reply-to) address
    #[serde(default)]
    pub from_email: String,
    /// Default subject line
    #[serde(default)]
    pub subject: String,
    /// Default language code (e.g. `en`)
    #[serde(default)]
    pub language: String,
}

impl Validate for CampaignDefaults {
    fn missing_fields(&self) -> Vec<String> {
        missing([
            ("from_name", self.from_name.as_str()),
            ("from_email", self.from_email.as_str()),
            ("subject", self.subject.as_str()),
            ("language", self.language.as_str()),
        ])
    }
}

/// A marketing list (called "audience" in the Mailchimp UI).
///
/// Use [`ListBuilder`] to construct a list that passes validation before
/// it is sent to the API. The server assigns `id`, `web_id` and
/// `date_created`; they are never sent back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Server-assigned list id
    #[serde(default, skip_serializing)]
    pub id: Option<ListId>,
    /// Numeric id used in the Mailchimp web UI
    #[serde(default, skip_serializing)]
    pub web_id: Option<u64>,
    /// List name
    #[serde(default)]
    pub name: String,
    /// Footer contact information
    #[serde(default)]
    pub contact: Contact,
    /// Reminder of how the recipient joined the list
    #[serde(default)]
    pub permission_reminder: String,
    /// Defaults for new campaigns
    #[serde(default)]
    pub campaign_defaults: CampaignDefaults,
    /// Whether subscribers may pick HTML or plain-text email
    #[serde(default)]
    pub email_type_option: bool,
    /// Whether campaigns show the archive toolbar
    #[serde(default)]
    pub use_archive_bar: bool,
    /// Address notified on every subscribe
    #[serde(default)]
    pub notify_on_subscribe: String,
    /// Address notified on every unsubscribe
    #[serde(default)]
    pub notify_on_unsubscribe: String,
    /// Whether new subscribers must confirm by email
    #[serde(default)]
    pub double_optin: bool,
    /// Whether GDPR marketing permissions are enabled
    #[serde(default)]
    pub marketing_permissions: bool,
    /// When the list was created
    #[serde(default, skip_serializing)]
    pub date_created: Option<DateTime<Utc>>,
}

impl Validate for List {
    fn missing_fields(&self) -> Vec<String> {
        let mut fields = missing([
            ("name", self.name.as_str()),
            ("permission_reminder", self.permission_reminder.as_str()),
        ]);
        fields.extend(nested("contact", self.contact.missing_fields()));
        fields.extend(nested(
            "campaign_defaults",
            self.campaign_defaults.missing_fields(),
        ));
        fields
    }
}

/// Builder for lists with validation.
///
/// # Example
///
/// ```
/// use mailchimp_rs::models::{CampaignDefaults, Contact, ListBuilder};
///
/// let list = ListBuilder::new()
///     .name("Newsletter")
///     .permission_reminder("You signed up on our website")
///     .contact(Contact {
///         company: "Acme".into(),
///         address1: "1 Main St".into(),
///         city: "Springfield".into(),
///         state: "IL".into(),
///         zip: "62701".into(),
///         country: "US".into(),
///         ..Default::default()
///     })
///     .campaign_defaults(CampaignDefaults {
///         from_name: "Acme".into(),
///         from_email: "news@acme.test".into(),
///         subject: "News".into(),
///         language: "en".into(),
///     })
///     .build()
///     .expect("all required fields set");
/// assert_eq!(list.name, "Newsletter");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ListBuilder {
    list: List,
}

impl ListBuilder {
    /// Create a new list builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.list.name = name.into();
        self
    }

    /// Set the permission reminder.
    pub fn permission_reminder(mut self, reminder: impl Into<String>) -> Self {
        self.list.permission_reminder = reminder.into();
        self
    }

    /// Set the footer contact information.
    pub fn contact(mut self, contact: Contact) -> Self {
        self.list.contact = contact;
        self
    }

    /// Set the campaign defaults.
    pub fn campaign_defaults(mut self, defaults: CampaignDefaults) -> Self {
        self.list.campaign_defaults = defaults;
        self
    }

    /// Let subscribers choose between HTML and plain-text email.
    pub fn email_type_option(mut self, enabled: bool) -> Self {
        self.list.email_type_option = enabled;
        self
    }

    /// Show the archive toolbar in campaigns.
    pub fn use_archive_bar(mut self, enabled: bool) -> Self {
        self.list.use_archive_bar = enabled;
        self
    }

    /// Address to notify on every subscribe.
    pub fn notify_on_subscribe(mut self, email: impl Into<String>) -> Self {
        self.list.notify_on_subscribe = email.into();
        self
    }

    /// Address to notify on every unsubscribe.
    pub fn notify_on_unsubscribe(mut self, email: impl Into<String>) -> Self {
        self.list.notify_on_unsubscribe = email.into();
        self
    }

    /// Require new subscribers to confirm by email.
    pub fn double_optin(mut self, enabled: bool) -> Self {
        self.list.double_optin = enabled;
        self
    }

    /// Enable GDPR marketing permissions.
    pub fn marketing_permissions(mut self, enabled: bool) -> Self {
        self.list.marketing_permissions = enabled;
        self
    }

    /// Build the list, checking the list and its nested contact and
    /// campaign defaults for unset required fields.
    pub fn build(self) -> crate::Result<List> {
        validate::check("list", self.list)
    }
}
