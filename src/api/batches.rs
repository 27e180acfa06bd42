//! Batch operations service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{BatchStatus, Operation};
use crate::Result;

/// Service for submitting batch operations.
///
/// Mailchimp runs the operations asynchronously; the returned
/// [`BatchStatus`] only acknowledges the submission.
pub struct BatchesService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct Request<'a> {
    operations: &'a [Operation],
}

impl BatchesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Submit operations to run as one batch.
    pub async fn submit(&self, operations: &[Operation]) -> Result<BatchStatus> {
        tracing::debug!(operations = operations.len(), "submitting batch");
        self.inner.post("/batches", &Request { operations }).await
    }
}
