//! Client configuration options.

/// Configuration for the Mailchimp client.
///
/// # Example
///
/// ```
/// use mailchimp_rs::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_user_agent("my-app/1.0")
///     .with_base_url("http://localhost:8080/3.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header value
    pub user_agent: String,
    /// Overrides the data center URL derived from the region
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("mailchimp-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Send requests to `base_url` instead of the region's API host.
    ///
    /// The URL must include the version root (`.../3.0`); request paths
    /// are appended to it.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}
