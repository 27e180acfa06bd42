//! API key credentials.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};

use crate::models::Region;
use crate::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "MAILCHIMP_API_KEY";
/// Environment variable holding the data center code.
pub const REGION_ENV: &str = "MAILCHIMP_REGION";

/// Username sent with the API key. Mailchimp accepts any non-empty value.
const BASIC_AUTH_USER: &str = "anystring";

/// An API key and the data center it belongs to.
///
/// The key is kept in a [`SecretString`] and never shows up in `Debug`
/// output.
///
/// # Example
///
/// ```
/// use mailchimp_rs::Credentials;
///
/// let credentials = Credentials::new("0123456789abcdef-us6", "us6").expect("valid region");
/// assert_eq!(credentials.region().as_str(), "us6");
/// ```
#[derive(Clone)]
pub struct Credentials {
    api_key: SecretString,
    region: Region,
}

impl Credentials {
    /// Create credentials from an API key and a data center code.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the region is not a valid
    /// data center code.
    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::InvalidInput("API key must not be empty".to_string()));
        }
        Ok(Self {
            api_key: SecretString::from(api_key),
            region: Region::new(region)?,
        })
    }

    /// Read credentials from `MAILCHIMP_API_KEY` and `MAILCHIMP_REGION`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{} must be set", API_KEY_ENV)))?;
        let region = std::env::var(REGION_ENV)
            .map_err(|_| Error::Config(format!("{} must be set", REGION_ENV)))?;
        Self::new(api_key, region)
    }

    /// The data center the key belongs to.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Value of the `Authorization` header for this key.
    ///
    /// HTTP Basic with a fixed username and the API key as password.
    pub(crate) fn authorization(&self) -> SecretString {
        authorization(self.api_key.expose_secret())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("region", &self.region)
            .finish()
    }
}

fn authorization(api_key: &str) -> SecretString {
    let encoded = STANDARD.encode(format!("{}:{}", BASIC_AUTH_USER, api_key));
    SecretString::from(format!("Basic {}", encoded))
}
