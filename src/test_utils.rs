//! Test utilities for code built on this crate.
//!
//! [`MockTransport`] stands in for the network so services can be tested
//! without credentials. Enable with the `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! mailchimp-rs = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use mailchimp_rs::MailchimpClient;
//! use mailchimp_rs::test_utils::MockTransport;
//! use serde_json::json;
//!
//! # async fn example() -> mailchimp_rs::Result<()> {
//! let mock = MockTransport::new()
//!     .with_json(json!({"health_status": "Everything's Chimpy!"}));
//! let client = MailchimpClient::with_transport(mock.clone());
//!
//! client.ping().await?;
//! assert_eq!(mock.requests()[0].path, "/ping");
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::client::Transport;
use crate::{Error, Result};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: &'static str,
    /// Request path
    pub path: String,
    /// JSON body, for POST and PATCH
    pub body: Option<Value>,
}

/// A transport that records requests and replays pre-programmed responses.
///
/// Responses are returned in the order they were added. Once the queue is
/// empty every request succeeds with an empty body, which is what
/// Mailchimp sends for deletes and tag updates.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<Bytes>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a mock transport with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response with a JSON body.
    pub fn with_json(self, body: Value) -> Self {
        self.with_body(body.to_string())
    }

    /// Queue a successful response with a raw body.
    pub fn with_body(self, body: impl Into<Bytes>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.into()));
        self
    }

    /// Queue a failure.
    pub fn with_error(self, error: Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Every request issued so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests issued so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn respond(&self, method: &'static str, path: &str, body: Option<&Value>) -> Result<Bytes> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Bytes::new()))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<Bytes> {
        self.respond("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Bytes> {
        self.respond("POST", path, Some(body))
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Bytes> {
        self.respond("PATCH", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<Bytes> {
        self.respond("DELETE", path, None)
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("call_count", &self.call_count())
            .finish()
    }
}
