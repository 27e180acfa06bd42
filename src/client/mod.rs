//! HTTP client and service layer for the Mailchimp Marketing API.
//!
//! [`MailchimpClient`] is the entry point. Requests go through a
//! [`Transport`]; [`HttpTransport`] talks to the real API, and any other
//! implementation can be plugged in with
//! [`MailchimpClient::with_transport`].
//!
//! # Example
//!
//! ```no_run
//! use mailchimp_rs::{ClientConfig, Credentials, MailchimpClient};
//!
//! # async fn example() -> mailchimp_rs::Result<()> {
//! let client = MailchimpClient::with_config(
//!     Credentials::from_env()?,
//!     ClientConfig::default().with_user_agent("newsletter-sync/2.1"),
//! )?;
//!
//! client.ping().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod transport;

pub use config::ClientConfig;
pub use http::{HttpTransport, MailchimpClient, HEALTHY_PING_RESPONSE};
pub use transport::Transport;
pub(crate) use http::ClientInner;
