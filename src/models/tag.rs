//! Member tag models.

use serde::{Deserialize, Serialize};

use super::validate::{self, missing, Validate};

/// Whether a tag is applied to or removed from a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
    /// Tag is applied
    #[default]
    Active,
    /// Tag is removed
    Inactive,
}

/// A label attached to a member.
///
/// The API only reports tags a member currently has, without a status,
/// so decoded tags are always [`TagStatus::Active`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Applied or removed
    #[serde(default)]
    pub status: TagStatus,
}

impl Tag {
    /// An active tag with the given name.
    pub fn active(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TagStatus::Active,
        }
    }

    /// An inactive tag with the given name.
    pub fn inactive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TagStatus::Inactive,
        }
    }
}

impl Validate for Tag {
    fn missing_fields(&self) -> Vec<String> {
        missing([("name", self.name.as_str())])
    }
}

/// Body of a member tag update.
///
/// `is_syncing: false` lets the update trigger tag-based automations,
/// `true` suppresses them.
#[derive(Debug, Serialize)]
pub(crate) struct TagsUpdate<'a> {
    pub tags: &'a [Tag],
    pub is_syncing: bool,
}

/// Builder for tags. Both name and status must be set.
#[derive(Debug, Default, Clone)]
pub struct TagBuilder {
    name: String,
    status: Option<TagStatus>,
}

impl TagBuilder {
    /// Create a new tag builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Apply the tag.
    pub fn active(mut self) -> Self {
        self.status = Some(TagStatus::Active);
        self
    }

    /// Remove the tag.
    pub fn inactive(mut self) -> Self {
        self.status = Some(TagStatus::Inactive);
        self
    }

    /// Build the tag, failing if the name or status is unset.
    pub fn build(self) -> crate::Result<Tag> {
        let Some(status) = self.status else {
            let mut fields = missing([("name", self.name.as_str())]);
            fields.push("status".to_string());
            return Err(crate::Error::Validation {
                entity: "tag",
                fields,
            });
        };

        validate::check(
            "tag",
            Tag {
                name: self.name,
                status,
            },
        )
    }
}
