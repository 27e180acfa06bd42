//! Primitive types and newtypes for type-safe API interactions.
//!
//! Lists and webhooks are addressed by opaque string ids, members by the
//! hash of their email address. Wrapping each in its own type keeps a
//! list id from ending up where a webhook id was expected.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The identifier percent-encoded for use as one URL path segment.
            pub fn path_segment(&self) -> Cow<'_, str> {
                urlencoding::encode(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// Identifier of a list (audience).
    ///
    /// # Example
    ///
    /// ```
    /// use mailchimp_rs::ListId;
    ///
    /// let list = ListId::new("a1b2c3d4e5");
    /// assert_eq!(list.to_string(), "a1b2c3d4e5");
    /// ```
    ListId
}

string_id! {
    /// Identifier of a webhook registered on a list.
    WebhookId
}

/// The id Mailchimp uses to address a list member.
///
/// It is the MD5 digest of the lower-cased email address, hex-encoded in
/// lowercase. The derivation has to match Mailchimp's bit for bit, so the
/// only way to obtain one is from an email address.
///
/// # Example
///
/// ```
/// use mailchimp_rs::SubscriberHash;
///
/// let a = SubscriberHash::from_email("Test@Test.com");
/// let b = SubscriberHash::from_email("test@test.com");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubscriberHash(String);

impl SubscriberHash {
    /// Hash an email address the way Mailchimp does.
    pub fn from_email(email: &str) -> Self {
        let digest = md5::compute(email.to_lowercase().as_bytes());
        Self(format!("{:x}", digest))
    }

    /// Get the hex digest as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SubscriberHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Mailchimp data center code (`us6`, `us21`, ...).
///
/// Every account lives in one data center and the API host name embeds
/// its code. It is the suffix after the dash in an API key.
///
/// # Example
///
/// ```
/// use mailchimp_rs::Region;
///
/// let region = Region::new("us6").expect("valid region");
/// assert_eq!(region.api_base_url(), "https://us6.api.mailchimp.com/3.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// Create a region, validating that it can be used as a host label.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty or contains anything other
    /// than ASCII letters and digits.
    pub fn new(code: impl Into<String>) -> crate::Result<Self> {
        let code = code.into();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(crate::Error::InvalidInput(format!(
                "Invalid region: {:?}. Expected a data center code such as \"us6\"",
                code
            )));
        }
        Ok(Region(code.to_ascii_lowercase()))
    }

    /// Get the data center code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base URL of the Marketing API in this data center.
    pub fn api_base_url(&self) -> String {
        format!("https://{}.api.mailchimp.com/3.0", self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
