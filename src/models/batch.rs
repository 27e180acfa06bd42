//! Batch operation models.
//!
//! A batch request hands Mailchimp a list of method/path/body triples to
//! run on its side. Nothing here schedules or tracks them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::primitives::{ListId, SubscriberHash};
use super::tag::{Tag, TagsUpdate};
use crate::{Error, Result};

/// One request inside a batch.
///
/// `body` is the JSON document of the request, already encoded as a string
/// the way the batches endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// HTTP method (`POST`, `PATCH`, ...)
    pub method: String,
    /// API path relative to the version root, e.g. `/lists/{id}`
    pub path: String,
    /// Encoded JSON request body
    #[serde(default)]
    pub body: String,
}

/// The operations of one batch request.
pub type OperationCollection = Vec<Operation>;

impl Operation {
    /// Create an operation from its parts.
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: body.into(),
        }
    }

    /// Create an operation with a body serialized from `body`.
    pub fn with_json<B: Serialize + ?Sized>(
        method: impl Into<String>,
        path: impl Into<String>,
        body: &B,
    ) -> Result<Self> {
        let body = serde_json::to_string(body).map_err(Error::Encode)?;
        Ok(Self::new(method, path, body))
    }

    /// Update the tags of a member, triggering tag automations.
    ///
    /// Equivalent to [`MembersService::update_tags`](crate::api::MembersService::update_tags)
    /// executed inside a batch.
    pub fn update_member_tags(list_id: &ListId, email: &str, tags: &[Tag]) -> Result<Self> {
        Self::with_json(
            "POST",
            format!(
                "/lists/{}/members/{}/tags",
                list_id.path_segment(),
                SubscriberHash::from_email(email)
            ),
            &TagsUpdate {
                tags,
                is_syncing: false,
            },
        )
    }
}

/// Processing state of a submitted batch, as reported by Mailchimp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BatchStatus {
    /// Batch id
    #[serde(default)]
    pub id: String,
    /// `pending`, `preprocessing`, `started`, `finalizing` or `finished`
    #[serde(default)]
    pub status: String,
    /// Number of operations in the batch
    #[serde(default)]
    pub total_operations: u64,
    /// Operations run so far
    #[serde(default)]
    pub finished_operations: u64,
    /// Operations that failed
    #[serde(default)]
    pub errored_operations: u64,
    /// When the batch was received
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the last operation ran
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Archive with the responses of every operation, once finished
    #[serde(default)]
    pub response_body_url: String,
}

// Unfinished batches report `completed_at` as an empty string.
fn optional_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| Some(timestamp.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}

impl BatchStatus {
    /// Whether Mailchimp has run every operation.
    pub fn is_finished(&self) -> bool {
        self.status == "finished"
    }
}
