//! Lists service.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{List, ListId, Member, MemberBatchSummary, MemberStatus};
use crate::{Error, Result};

/// Largest number of members one batch subscribe request may carry.
pub const MAX_BATCH_MEMBERS: usize = 500;

/// Service for list operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: mailchimp_rs::MailchimpClient) -> mailchimp_rs::Result<()> {
/// use mailchimp_rs::models::MemberBuilder;
///
/// let lists = client.lists().list().await?;
/// let list_id = lists[0].id.clone().expect("server-assigned id");
///
/// let members = vec![
///     MemberBuilder::new().email_address("jane@example.com").subscribed().build()?,
///     MemberBuilder::new().email_address("joe@example.com").pending().build()?,
/// ];
/// let summary = client.lists().batch(&list_id, &members, false).await?;
/// println!("{} created", summary.total_created);
/// # Ok(())
/// # }
/// ```
pub struct ListsService {
    inner: Arc<ClientInner>,
}

/// Reduced member shape accepted by the batch endpoint.
#[derive(Serialize)]
struct BatchMember<'a> {
    email_address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<MemberStatus>,
    #[serde(skip_serializing_if = "no_merge_fields")]
    merge_fields: &'a BTreeMap<String, Value>,
}

fn no_merge_fields(fields: &&BTreeMap<String, Value>) -> bool {
    fields.is_empty()
}

#[derive(Serialize)]
struct BatchRequest<'a> {
    members: Vec<BatchMember<'a>>,
    update_existing: bool,
}

impl ListsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a new list.
    ///
    /// Returns the list as stored by Mailchimp, with its id and web id set.
    pub async fn create(&self, list: &List) -> Result<List> {
        self.inner.post("/lists", list).await
    }

    /// Get every list of the account.
    pub async fn list(&self) -> Result<Vec<List>> {
        #[derive(Deserialize)]
        struct Response {
            lists: Vec<List>,
        }

        let response: Response = self.inner.get("/lists").await?;
        Ok(response.lists)
    }

    /// Get a list by id.
    pub async fn get(&self, list_id: &ListId) -> Result<List> {
        self.inner.get(&format!("/lists/{}", list_id.path_segment())).await
    }

    /// Update the settings of a list.
    pub async fn update(&self, list_id: &ListId, list: &List) -> Result<List> {
        self.inner.patch(&format!("/lists/{}", list_id.path_segment()), list).await
    }

    /// Delete a list and all of its members.
    pub async fn delete(&self, list_id: &ListId) -> Result<()> {
        self.inner.delete(&format!("/lists/{}", list_id.path_segment())).await
    }

    /// Add up to [`MAX_BATCH_MEMBERS`] members to a list in one request.
    ///
    /// With `update_existing`, members already on the list are updated
    /// instead of reported as errors. Only email address, status and merge
    /// fields of each member are sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyMembers`] without sending anything if more
    /// than [`MAX_BATCH_MEMBERS`] members are given.
    pub async fn batch(
        &self,
        list_id: &ListId,
        members: &[Member],
        update_existing: bool,
    ) -> Result<MemberBatchSummary> {
        if members.len() > MAX_BATCH_MEMBERS {
            return Err(Error::TooManyMembers {
                count: members.len(),
                max: MAX_BATCH_MEMBERS,
            });
        }

        let request = BatchRequest {
            members: members
                .iter()
                .map(|member| BatchMember {
                    email_address: &member.email_address,
                    status: member.status,
                    merge_fields: &member.merge_fields,
                })
                .collect(),
            update_existing,
        };

        self.inner.post(&format!("/lists/{}", list_id.path_segment()), &request).await
    }

    /// Add members, reporting those already on the list as errors.
    pub async fn batch_subscribe(
        &self,
        list_id: &ListId,
        members: &[Member],
    ) -> Result<MemberBatchSummary> {
        self.batch(list_id, members, false).await
    }

    /// Add members, updating those already on the list.
    pub async fn batch_upsert(
        &self,
        list_id: &ListId,
        members: &[Member],
    ) -> Result<MemberBatchSummary> {
        self.batch(list_id, members, true).await
    }
}
