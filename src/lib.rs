//! # mailchimp-rs
//!
//! An async Rust client for the Mailchimp Marketing API (v3.0).
//!
//! ## Features
//!
//! - **Lists**: create, fetch, update and delete audiences
//! - **Members**: batch subscribe up to 500 members, update, archive and tag them
//! - **Webhooks**: register and remove webhook subscriptions
//! - **Batches**: submit operations for Mailchimp to run server-side
//! - **Validation**: builders refuse entities with missing required fields
//! - **Testability**: every service runs against a pluggable [`Transport`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mailchimp_rs::MailchimpClient;
//! use mailchimp_rs::models::MemberBuilder;
//!
//! #[tokio::main]
//! async fn main() -> mailchimp_rs::Result<()> {
//!     let client = MailchimpClient::new("your-api-key", "us1")?;
//!     client.ping().await?;
//!
//!     let lists = client.lists().list().await?;
//!     if let Some(list_id) = lists.first().and_then(|list| list.id.clone()) {
//!         let member = MemberBuilder::new()
//!             .email_address("jane@example.com")
//!             .subscribed()
//!             .merge_field("FNAME", "Jane")
//!             .build()?;
//!
//!         let summary = client.lists().batch_subscribe(&list_id, &[member]).await?;
//!         println!("{} created, {} rejected", summary.total_created, summary.error_count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Non-2xx responses become [`Error::Api`] carrying Mailchimp's problem
//! document. Validation and batch size problems are reported before any
//! request is made:
//!
//! ```rust
//! use mailchimp_rs::models::ListBuilder;
//! use mailchimp_rs::Error;
//!
//! let err = ListBuilder::new().name("Newsletter").build().unwrap_err();
//! assert!(matches!(err, Error::Validation { entity: "list", .. }));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{ClientConfig, HttpTransport, MailchimpClient, Transport};
pub use error::{Error, Result};
pub use models::{ListId, Region, SubscriberHash, WebhookId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use mailchimp_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, MailchimpClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        ListId, Region, SubscriberHash, WebhookId,
        // Lists
        CampaignDefaults, Contact, List, ListBuilder,
        // Members
        EmailType, Member, MemberBatchSummary, MemberBuilder, MemberStatus,
        // Tags
        Tag, TagBuilder, TagStatus,
        // Webhooks
        Webhook, WebhookBuilder, WebhookEvents, WebhookSources,
        // Batches
        BatchStatus, Operation,
        Validate,
    };
}
