//! The request/response seam between the services and the network.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::Result;

/// Issues one request against the API and returns the raw response body.
///
/// Paths are relative to the API version root (`/lists/{id}`).
/// Implementations return the body of 2xx responses unchanged and map
/// every other status to an error. [`HttpTransport`](super::HttpTransport)
/// is the production implementation; tests substitute their own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, path: &str) -> Result<Bytes>;

    /// Issue a POST request with a JSON body.
    async fn post(&self, path: &str, body: &Value) -> Result<Bytes>;

    /// Issue a PATCH request with a JSON body.
    async fn patch(&self, path: &str, body: &Value) -> Result<Bytes>;

    /// Issue a DELETE request.
    async fn delete(&self, path: &str) -> Result<Bytes>;
}
