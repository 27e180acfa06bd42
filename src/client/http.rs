//! HTTP client implementation for the Mailchimp Marketing API.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{BatchesService, ListsService, MembersService, WebhooksService};
use crate::auth::Credentials;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::transport::Transport;

/// Greeting the `/ping` endpoint answers with when the API is healthy.
pub const HEALTHY_PING_RESPONSE: &str = "Everything's Chimpy!";

/// The main client for interacting with the Mailchimp Marketing API.
///
/// The client hands out one service per resource group. It is cheap to
/// clone and can be shared between tasks; it holds no per-call state.
///
/// # Example
///
/// ```no_run
/// use mailchimp_rs::{ListId, MailchimpClient};
///
/// # async fn example() -> mailchimp_rs::Result<()> {
/// let client = MailchimpClient::new("your-api-key-us6", "us6")?;
/// client.ping().await?;
///
/// let lists = client.lists().list().await?;
/// for list in &lists {
///     println!("{}", list.name);
/// }
///
/// let tags = client
///     .members()
///     .tags(&ListId::new("57afe96172"), "jane@example.com")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MailchimpClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Arc<dyn Transport>,
}

impl MailchimpClient {
    /// Create a client for the given API key and data center.
    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_key, region)?, ClientConfig::default())
    }

    /// Create a client from `MAILCHIMP_API_KEY` and `MAILCHIMP_REGION`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&credentials, &config)?;
        Ok(Self::with_transport(transport))
    }

    /// Create a client on top of a caller-built [`reqwest::Client`].
    ///
    /// Timeouts, proxies and connection limits are configured on the
    /// reqwest client; this crate sets none of them.
    pub fn with_http_client(
        http: reqwest::Client,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = HttpTransport::with_http_client(http, &credentials, &config)?;
        Ok(Self::with_transport(transport))
    }

    /// Create a client that sends every request through `transport`.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport: Arc::new(transport),
            }),
        }
    }

    /// Check that the API is reachable and the credentials are accepted.
    ///
    /// Fails unless the API answers with its healthy greeting, even when
    /// the request itself succeeded.
    pub async fn ping(&self) -> Result<()> {
        #[derive(Deserialize)]
        struct Response {
            health_status: String,
        }

        let response: Response = self.inner.get("/ping").await?;
        if response.health_status != HEALTHY_PING_RESPONSE {
            return Err(Error::UnexpectedPing(response.health_status));
        }
        Ok(())
    }

    /// Get the lists service.
    pub fn lists(&self) -> ListsService {
        ListsService::new(self.inner.clone())
    }

    /// Get the members and tags service.
    pub fn members(&self) -> MembersService {
        MembersService::new(self.inner.clone())
    }

    /// Get the webhooks service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }

    /// Get the batch operations service.
    pub fn batches(&self) -> BatchesService {
        BatchesService::new(self.inner.clone())
    }
}

impl ClientInner {
    /// GET and decode the response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.transport.get(path).await?;
        decode(&body)
    }

    /// POST and decode the response.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = self.transport.post(path, &encode(body)?).await?;
        decode(&body)
    }

    /// POST, ignoring the response body.
    pub(crate) async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        self.transport.post(path, &encode(body)?).await?;
        Ok(())
    }

    /// PATCH and decode the response.
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = self.transport.patch(path, &encode(body)?).await?;
        decode(&body)
    }

    /// DELETE. Successful deletes answer with no content.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.transport.delete(path).await?;
        Ok(())
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(Error::Encode)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::Decode)
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
///
/// Builds `{base_url}{path}`, attaches the Basic authorization header and
/// classifies the response by the first digit of its status code.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpTransport {
    /// Create a transport with its own reqwest client.
    pub fn new(credentials: &Credentials, config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Self::with_http_client(http, credentials, config)
    }

    /// Create a transport on top of an existing reqwest client.
    pub fn with_http_client(
        http: reqwest::Client,
        credentials: &Credentials,
        config: &ClientConfig,
    ) -> Result<Self> {
        let base_url = match &config.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => credentials.region().api_base_url(),
        };
        url::Url::parse(&base_url)?;

        Ok(Self {
            http,
            base_url,
            headers: build_headers(credentials, config)?,
        })
    }

    /// The URL requests are sent to, without the path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Bytes> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(self.headers.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "sending Mailchimp API request");
        let response = request.send().await?;
        self.handle_response(&method, path, response).await
    }

    /// Handle an API response.
    async fn handle_response(
        &self,
        method: &Method,
        path: &str,
        response: reqwest::Response,
    ) -> Result<Bytes> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!(%method, path, status, "received Mailchimp API response");

        if status / 100 == 2 {
            Ok(body)
        } else {
            Err(Error::from_api_response(status, &body))
        }
    }
}

fn build_headers(credentials: &Credentials, config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(credentials.authorization().expose_secret())
        .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&config.user_agent)
            .map_err(|_| Error::InvalidInput("Invalid user agent".to_string()))?,
    );

    Ok(headers)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Bytes> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Bytes> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Bytes> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Bytes> {
        self.send(Method::DELETE, path, None).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for MailchimpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailchimpClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockTransport;
    use serde_json::json;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_unencodable_body_sends_nothing() {
        let mock = MockTransport::new();
        let client = MailchimpClient::with_transport(mock.clone());
        // JSON object keys must be strings
        let body: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);

        let err = client
            .inner
            .post_no_content("/lists/abc", &body)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Encode(_)));
        assert!(err.is_local());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ping_success() {
        let mock = MockTransport::new().with_json(json!({"health_status": "Everything's Chimpy!"}));
        let client = MailchimpClient::with_transport(mock.clone());

        client.ping().await.unwrap();

        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.requests()[0].method, "GET");
        assert_eq!(mock.requests()[0].path, "/ping");
    }

    #[tokio::test]
    async fn test_ping_unexpected_greeting() {
        let mock = MockTransport::new().with_json(json!({"health_status": "Everything's fine"}));
        let client = MailchimpClient::with_transport(mock);

        let err = client.ping().await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedPing(ref s) if s == "Everything's fine"));
    }

    #[tokio::test]
    async fn test_ping_decode_failure() {
        let mock = MockTransport::new().with_json(json!({"status": "Everything's Chimpy!"}));
        let client = MailchimpClient::with_transport(mock);

        let err = client.ping().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_ping_propagates_transport_error() {
        let mock = MockTransport::new().with_error(Error::UnparseableErrorResponse { status: 500 });
        let client = MailchimpClient::with_transport(mock);

        let err = client.ping().await.unwrap_err();
        assert!(matches!(err, Error::UnparseableErrorResponse { status: 500 }));
    }

    #[test]
    fn test_headers() {
        let credentials = Credentials::new("123456", "us6").unwrap();
        let headers = build_headers(&credentials, &ClientConfig::default()).unwrap();

        let authorization = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(
            authorization.to_str().unwrap(),
            "Basic YW55c3RyaW5nOjEyMzQ1Ng=="
        );
        assert!(authorization.is_sensitive());
        assert!(headers.contains_key(USER_AGENT));
    }

    #[test]
    fn test_base_url_from_region() {
        let credentials = Credentials::new("key", "us6").unwrap();
        let transport = HttpTransport::new(&credentials, &ClientConfig::default()).unwrap();
        assert_eq!(transport.base_url(), "https://us6.api.mailchimp.com/3.0");
    }

    #[test]
    fn test_base_url_override() {
        let credentials = Credentials::new("key", "us6").unwrap();
        let config = ClientConfig::default().with_base_url("http://localhost:9000/3.0/");
        let transport = HttpTransport::new(&credentials, &config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:9000/3.0");

        let config = ClientConfig::default().with_base_url("not a url");
        assert!(matches!(
            HttpTransport::new(&credentials, &config),
            Err(Error::UrlParse(_))
        ));
    }

    #[test]
    fn test_client_debug_hides_credentials() {
        let client = MailchimpClient::new("super-secret-key", "us6").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret-key"));
    }
}
