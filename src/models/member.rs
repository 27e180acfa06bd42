//! List member models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::primitives::{ListId, SubscriberHash};
use super::validate::{self, missing, Validate};

/// Subscription status of a list member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Receives campaigns
    Subscribed,
    /// Opted out
    Unsubscribed,
    /// Has not confirmed a double opt-in yet
    Pending,
    /// Removed after hard bounces
    Cleaned,
    /// Receives transactional email only
    Transactional,
    /// Archived; only reported by the API
    Archived,
}

impl MemberStatus {
    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Subscribed => "subscribed",
            MemberStatus::Unsubscribed => "unsubscribed",
            MemberStatus::Pending => "pending",
            MemberStatus::Cleaned => "cleaned",
            MemberStatus::Transactional => "transactional",
            MemberStatus::Archived => "archived",
        }
    }
}

/// Preferred email format of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    /// HTML email
    Html,
    /// Plain-text email
    Text,
}

/// One subscriber within a list.
///
/// The email address is the member's identity: the API addresses members
/// by [`SubscriberHash`], derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Member id assigned by the server (the subscriber hash)
    #[serde(default, skip_serializing)]
    pub id: Option<String>,
    /// List the member belongs to
    #[serde(default, skip_serializing)]
    pub list_id: Option<ListId>,
    /// Email address
    #[serde(default)]
    pub email_address: String,
    /// Preferred email format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_type: Option<EmailType>,
    /// Subscription status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
    /// Audience merge fields, keyed by merge tag (`FNAME`, `LNAME`, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub merge_fields: BTreeMap<String, Value>,
}

impl Member {
    /// Create a member with only an email address set.
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            ..Default::default()
        }
    }

    /// The id the API uses to address this member.
    pub fn subscriber_hash(&self) -> SubscriberHash {
        SubscriberHash::from_email(&self.email_address)
    }
}

impl Validate for Member {
    fn missing_fields(&self) -> Vec<String> {
        missing([("email_address", self.email_address.as_str())])
    }
}

/// A member the batch endpoint could not add or update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MemberError {
    /// Address of the rejected member
    #[serde(default)]
    pub email_address: String,
    /// Why it was rejected
    #[serde(default)]
    pub error: String,
    /// Machine-readable reason (`ERROR_CONTACT_EXISTS`, ...)
    #[serde(default)]
    pub error_code: String,
}

/// Outcome of a batch subscribe request.
///
/// Rejected members do not fail the request; they are listed in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MemberBatchSummary {
    /// Members that were added
    #[serde(default)]
    pub new_members: Vec<Member>,
    /// Members that were updated
    #[serde(default)]
    pub updated_members: Vec<Member>,
    /// Members that were rejected
    #[serde(default)]
    pub errors: Vec<MemberError>,
    /// Number of members added
    #[serde(default)]
    pub total_created: u64,
    /// Number of members updated
    #[serde(default)]
    pub total_updated: u64,
    /// Number of members rejected
    #[serde(default)]
    pub error_count: u64,
}

/// Builder for members with validation.
///
/// # Example
///
/// ```
/// use mailchimp_rs::models::MemberBuilder;
///
/// let member = MemberBuilder::new()
///     .email_address("jane@example.com")
///     .subscribed()
///     .merge_field("FNAME", "Jane")
///     .build()
///     .expect("email set");
/// assert_eq!(member.merge_fields["FNAME"], "Jane");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemberBuilder {
    member: Member,
}

impl MemberBuilder {
    /// Create a new member builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email address.
    pub fn email_address(mut self, email: impl Into<String>) -> Self {
        self.member.email_address = email.into();
        self
    }

    /// Set the preferred email format.
    pub fn email_type(mut self, email_type: EmailType) -> Self {
        self.member.email_type = Some(email_type);
        self
    }

    /// Set the subscription status.
    pub fn status(mut self, status: MemberStatus) -> Self {
        self.member.status = Some(status);
        self
    }

    /// Mark the member as subscribed.
    pub fn subscribed(self) -> Self {
        self.status(MemberStatus::Subscribed)
    }

    /// Mark the member as unsubscribed.
    pub fn unsubscribed(self) -> Self {
        self.status(MemberStatus::Unsubscribed)
    }

    /// Mark the member as pending confirmation.
    pub fn pending(self) -> Self {
        self.status(MemberStatus::Pending)
    }

    /// Mark the member as cleaned.
    pub fn cleaned(self) -> Self {
        self.status(MemberStatus::Cleaned)
    }

    /// Add or replace a merge field.
    pub fn merge_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.member.merge_fields.insert(name.into(), value.into());
        self
    }

    /// Build the member, failing if the email address is unset.
    pub fn build(self) -> crate::Result<Member> {
        validate::check("member", self.member)
    }
}
