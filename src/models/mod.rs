//! Data models for the Mailchimp Marketing API.
//!
//! - [`primitives`] - Ids, the subscriber hash and the data center region
//! - [`list`] - Lists (audiences) with their contact and campaign defaults
//! - [`member`] - List members
//! - [`tag`] - Member tags
//! - [`webhook`] - Webhook subscriptions
//! - [`batch`] - Batch operations
//! - [`validate`] - Required-field checks used by the builders

pub mod primitives;
pub mod list;
pub mod member;
pub mod tag;
pub mod webhook;
pub mod batch;
pub mod validate;

pub use primitives::*;
pub use list::*;
pub use member::*;
pub use tag::*;
pub use webhook::*;
pub use batch::*;
pub use validate::Validate;
