//! Bulk document writer.

use async_trait::async_trait;
use opensearch::http::request::JsonBody;
use opensearch::params::Refresh;
use opensearch::{BulkParts, OpenSearch};
use serde_json::{json, Value};
use tracing::debug;

use search_store_shared::RefreshPolicy;

use crate::errors::ClientError;
use crate::interfaces::DocumentWriter;

/// Streams documents into an index through the bulk API.
///
/// The writer owns the transport handed to it at creation. Documents buffer
/// locally until `flush`; every flush applies the configured refresh policy.
pub struct BulkWriter {
    client: OpenSearch,
    index: String,
    refresh_policy: RefreshPolicy,
    pending: Vec<Value>,
}

impl BulkWriter {
    pub(crate) fn new(client: OpenSearch, index: String, refresh_policy: RefreshPolicy) -> Self {
        Self {
            client,
            index,
            refresh_policy,
            pending: Vec::new(),
        }
    }

    /// Number of documents buffered and not yet flushed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn refresh_param(policy: RefreshPolicy) -> Refresh {
        match policy {
            RefreshPolicy::None => Refresh::False,
            RefreshPolicy::Immediate => Refresh::True,
            RefreshPolicy::WaitFor => Refresh::WaitFor,
        }
    }
}

#[async_trait]
impl DocumentWriter for BulkWriter {
    fn write(&mut self, document: Value) {
        self.pending.push(document);
    }

    async fn flush(&mut self) -> Result<(), ClientError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let documents: Vec<Value> = self.pending.drain(..).collect();
        let count = documents.len();

        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(count * 2);
        for document in documents {
            body.push(json!({ "index": {} }).into());
            body.push(document.into());
        }

        let response = self
            .client
            .bulk(BulkParts::Index(&self.index))
            .refresh(Self::refresh_param(self.refresh_policy))
            .body(body)
            .send()
            .await
            .map_err(|e| ClientError::index_operation("write", &self.index, e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ClientError::index_operation(
                "write",
                &self.index,
                format!("Store returned {}: {}", status, error_body),
            ));
        }

        let response_body = response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::index_operation("write", &self.index, e.to_string()))?;

        // The bulk API reports item-level failures with a 200 status
        if response_body["errors"].as_bool().unwrap_or(false) {
            return Err(ClientError::index_operation(
                "write",
                &self.index,
                "Bulk response reported item failures",
            ));
        }

        debug!(index = %self.index, count = count, "Flushed documents");
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ClientError> {
        self.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(policy: RefreshPolicy) -> BulkWriter {
        BulkWriter::new(OpenSearch::default(), "logs-2024".to_string(), policy)
    }

    #[test]
    fn test_writes_accumulate_until_flush() {
        let mut writer = writer(RefreshPolicy::None);

        writer.write(json!({ "name": "alpha" }));
        writer.write(json!({ "name": "beta" }));

        assert_eq!(writer.pending(), 2);
    }

    #[tokio::test]
    async fn test_flush_with_empty_buffer_is_noop() {
        let mut writer = writer(RefreshPolicy::None);

        // Performs no request, so no live store is needed
        writer.flush().await.unwrap();

        assert_eq!(writer.pending(), 0);
    }

    #[test]
    fn test_refresh_param_mapping() {
        assert!(matches!(
            BulkWriter::refresh_param(RefreshPolicy::None),
            Refresh::False
        ));
        assert!(matches!(
            BulkWriter::refresh_param(RefreshPolicy::Immediate),
            Refresh::True
        ));
        assert!(matches!(
            BulkWriter::refresh_param(RefreshPolicy::WaitFor),
            Refresh::WaitFor
        ));
    }
}
