//! Members and member tags service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::ClientInner;
use crate::models::{ListId, Member, SubscriberHash, Tag, TagStatus, TagsUpdate};
use crate::Result;

/// Service for list member operations.
///
/// Members are addressed by email address; the service derives the
/// [`SubscriberHash`] the API expects.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: mailchimp_rs::MailchimpClient) -> mailchimp_rs::Result<()> {
/// use mailchimp_rs::ListId;
/// use mailchimp_rs::models::Tag;
///
/// let list_id = ListId::new("57afe96172");
///
/// // Triggers automations set up for the "vip" tag
/// client
///     .members()
///     .update_tags(&list_id, "jane@example.com", &[Tag::active("vip")])
///     .await?;
///
/// // Same update without triggering automations
/// client
///     .members()
///     .update_tags_sync(&list_id, "jane@example.com", &[Tag::inactive("trial")])
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct MembersService {
    inner: Arc<ClientInner>,
}

fn member_path(list_id: &ListId, email: &str) -> String {
    format!(
        "/lists/{}/members/{}",
        list_id.path_segment(),
        SubscriberHash::from_email(email)
    )
}

fn tags_path(list_id: &ListId, email: &str) -> String {
    format!("{}/tags", member_path(list_id, email))
}

impl MembersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Update a member, e.g. to change their email address or status.
    ///
    /// `email` is the address the member is currently subscribed with.
    pub async fn update(&self, list_id: &ListId, email: &str, member: &Member) -> Result<Member> {
        self.inner.patch(&member_path(list_id, email), member).await
    }

    /// Archive a member. Archived members can be re-added later.
    pub async fn archive(&self, list_id: &ListId, email: &str) -> Result<()> {
        self.inner.delete(&member_path(list_id, email)).await
    }

    /// Get the tags of a member.
    ///
    /// Every returned tag is active; the API only reports applied tags.
    pub async fn tags(&self, list_id: &ListId, email: &str) -> Result<Vec<Tag>> {
        #[derive(Deserialize)]
        struct Response {
            tags: Vec<Tag>,
        }

        let response: Response = self.inner.get(&tags_path(list_id, email)).await?;
        Ok(response
            .tags
            .into_iter()
            .map(|tag| Tag {
                status: TagStatus::Active,
                ..tag
            })
            .collect())
    }

    /// Add or remove tags on a member, triggering tag automations.
    pub async fn update_tags(&self, list_id: &ListId, email: &str, tags: &[Tag]) -> Result<()> {
        self.send_tags(list_id, email, tags, false).await
    }

    /// Add or remove tags on a member without triggering tag automations.
    pub async fn update_tags_sync(
        &self,
        list_id: &ListId,
        email: &str,
        tags: &[Tag],
    ) -> Result<()> {
        self.send_tags(list_id, email, tags, true).await
    }

    async fn send_tags(
        &self,
        list_id: &ListId,
        email: &str,
        tags: &[Tag],
        is_syncing: bool,
    ) -> Result<()> {
        self.inner
            .post_no_content(&tags_path(list_id, email), &TagsUpdate { tags, is_syncing })
            .await
    }
}
