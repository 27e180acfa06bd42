//! Authentication for the Mailchimp Marketing API.
//!
//! Mailchimp authenticates every request with HTTP Basic: any username and
//! the API key as password. Keys are bound to a data center, whose code is
//! part of the API host name, so credentials carry both.
//!
//! ```no_run
//! use mailchimp_rs::Credentials;
//!
//! # fn example() -> mailchimp_rs::Result<()> {
//! // Explicit
//! let credentials = Credentials::new("your-api-key-us6", "us6")?;
//!
//! // From MAILCHIMP_API_KEY / MAILCHIMP_REGION
//! let credentials = Credentials::from_env()?;
//! # Ok(())
//! # }
//! ```

mod credentials;

pub use credentials::{Credentials, API_KEY_ENV, REGION_ENV};
