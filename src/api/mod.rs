//! API service modules for Mailchimp endpoints.
//!
//! Each service covers one resource of the Marketing API and is reached
//! through an accessor on [`MailchimpClient`](crate::MailchimpClient).

mod batches;
mod lists;
mod members;
mod webhooks;

pub use batches::BatchesService;
pub use lists::{ListsService, MAX_BATCH_MEMBERS};
pub use members::MembersService;
pub use webhooks::WebhooksService;
