//! Index store client implementation.
//!
//! This module provides the main client for managing index lifecycles and
//! creating document readers/writers. Application code uses this rather
//! than a backend implementation directly.

use search_store_shared::IndexMetadata;
use serde_json::Value;

use crate::errors::ClientError;
use crate::interfaces::{DocumentReader, DocumentWriter, IndexStoreProvider};

/// The main client for managing indices in the search store.
///
/// Wraps a backend provider and validates inputs before delegating.
/// Operations are independent and share no mutable state, so one client
/// instance can serve concurrent callers.
pub struct IndexStoreClient {
    provider: Box<dyn IndexStoreProvider>,
}

impl IndexStoreClient {
    /// Create a new client over the given backend provider.
    pub fn new(provider: Box<dyn IndexStoreProvider>) -> Self {
        Self { provider }
    }

    fn validate_name(name: &str) -> Result<(), ClientError> {
        if name.trim().is_empty() {
            return Err(ClientError::config("Index name is required"));
        }
        Ok(())
    }

    /// Create an index, supplying the metadata JSON verbatim as its
    /// mappings/settings body.
    pub async fn create_index(
        &self,
        name: &str,
        metadata: &IndexMetadata,
    ) -> Result<(), ClientError> {
        Self::validate_name(name)?;
        self.provider.create_index(name, metadata).await
    }

    /// Check whether an index exists.
    ///
    /// Absence is a normal `false`; only transport failures produce `Err`.
    pub async fn index_exists(&self, name: &str) -> Result<bool, ClientError> {
        Self::validate_name(name)?;
        self.provider.index_exists(name).await
    }

    /// Fetch an index's mapping document as the store reports it.
    pub async fn index_metadata(&self, name: &str) -> Result<IndexMetadata, ClientError> {
        Self::validate_name(name)?;
        self.provider.index_metadata(name).await
    }

    /// Delete an index. Deleting an absent index is an error.
    pub async fn delete_index(&self, name: &str) -> Result<(), ClientError> {
        Self::validate_name(name)?;
        self.provider.delete_index(name).await
    }

    /// Create a reader streaming documents that match `query`.
    ///
    /// A `None` or blank query reads the whole index. Query parse and
    /// configuration failures propagate unchanged; the caller can tell
    /// "could not connect" from "could not parse query" by the error kind.
    pub async fn create_reader(
        &self,
        name: &str,
        query: Option<&str>,
    ) -> Result<Box<dyn DocumentReader>, ClientError> {
        Self::validate_name(name)?;
        self.provider.create_reader(name, query).await
    }

    /// Create a writer streaming documents into the index under the
    /// configured refresh policy.
    pub async fn create_writer(&self, name: &str) -> Result<Box<dyn DocumentWriter>, ClientError> {
        Self::validate_name(name)?;
        self.provider.create_writer(name).await
    }

    /// Read every document matched by `query` into memory.
    ///
    /// Convenience over `create_reader` for small result sets; drains the
    /// reader and closes it.
    pub async fn read_all(
        &self,
        name: &str,
        query: Option<&str>,
    ) -> Result<Vec<Value>, ClientError> {
        let mut reader = self.create_reader(name, query).await?;
        let mut documents = Vec::new();

        loop {
            match reader.next_batch().await {
                Ok(Some(batch)) => documents.extend(batch),
                Ok(None) => break,
                Err(e) => {
                    // Best effort: release the cursor before surfacing
                    let _ = reader.close().await;
                    return Err(e);
                }
            }
        }

        reader.close().await?;
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opensearch::resolve_query;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// In-memory provider for testing: index name -> metadata content.
    struct MockProvider {
        indices: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                indices: Arc::new(Mutex::new(HashMap::new())),
            }
        }
    }

    /// Reader double yielding a fixed set of pages.
    struct MockReader {
        pages: Vec<Vec<Value>>,
        closed: bool,
    }

    #[async_trait]
    impl DocumentReader for MockReader {
        async fn next_batch(&mut self) -> Result<Option<Vec<Value>>, ClientError> {
            if self.closed || self.pages.is_empty() {
                return Ok(None);
            }
            Ok(Some(self.pages.remove(0)))
        }

        async fn close(&mut self) -> Result<(), ClientError> {
            self.closed = true;
            Ok(())
        }
    }

    struct MockWriter;

    #[async_trait]
    impl DocumentWriter for MockWriter {
        fn write(&mut self, _document: Value) {}

        async fn flush(&mut self) -> Result<(), ClientError> {
            Ok(())
        }

        async fn close(&mut self) -> Result<(), ClientError> {
            Ok(())
        }
    }

    #[async_trait]
    impl IndexStoreProvider for MockProvider {
        async fn create_index(
            &self,
            name: &str,
            metadata: &IndexMetadata,
        ) -> Result<(), ClientError> {
            let mut indices = self.indices.lock().await;
            if indices.contains_key(name) {
                return Err(ClientError::index_operation(
                    "create",
                    name,
                    "Index already exists",
                ));
            }
            indices.insert(name.to_string(), metadata.content().to_string());
            Ok(())
        }

        async fn index_exists(&self, name: &str) -> Result<bool, ClientError> {
            Ok(self.indices.lock().await.contains_key(name))
        }

        async fn index_metadata(&self, name: &str) -> Result<IndexMetadata, ClientError> {
            self.indices
                .lock()
                .await
                .get(name)
                .map(IndexMetadata::new)
                .ok_or_else(|| ClientError::index_operation("describe", name, "Index not found"))
        }

        async fn delete_index(&self, name: &str) -> Result<(), ClientError> {
            if self.indices.lock().await.remove(name).is_none() {
                return Err(ClientError::index_operation(
                    "delete",
                    name,
                    "Index not found",
                ));
            }
            Ok(())
        }

        async fn create_reader(
            &self,
            _name: &str,
            query: Option<&str>,
        ) -> Result<Box<dyn DocumentReader>, ClientError> {
            // Same resolution path as the real backend, so parse failures
            // propagate unchanged through the facade
            resolve_query(query)?;
            Ok(Box::new(MockReader {
                pages: vec![
                    vec![json!({ "name": "alpha" }), json!({ "name": "beta" })],
                    vec![json!({ "name": "gamma" })],
                ],
                closed: false,
            }))
        }

        async fn create_writer(&self, _name: &str) -> Result<Box<dyn DocumentWriter>, ClientError> {
            Ok(Box::new(MockWriter))
        }
    }

    fn client() -> IndexStoreClient {
        IndexStoreClient::new(Box::new(MockProvider::new()))
    }

    #[tokio::test]
    async fn test_index_lifecycle_scenario() {
        let client = client();
        let mapping = IndexMetadata::new(r#"{"properties":{"ts":{"type":"date"}}}"#);

        client.create_index("logs-2024", &mapping).await.unwrap();
        assert!(client.index_exists("logs-2024").await.unwrap());

        let metadata = client.index_metadata("logs-2024").await.unwrap();
        let parsed: Value = serde_json::from_str(metadata.content()).unwrap();
        assert_eq!(parsed["properties"]["ts"]["type"], "date");

        client.delete_index("logs-2024").await.unwrap();
        assert!(!client.index_exists("logs-2024").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_is_false_not_error_for_unknown_index() {
        let client = client();

        assert!(!client.index_exists("never-created").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_conflict_is_index_operation_error() {
        let client = client();
        let mapping = IndexMetadata::new("{}");

        client.create_index("logs-2024", &mapping).await.unwrap();
        let result = client.create_index("logs-2024", &mapping).await;

        assert!(matches!(
            result,
            Err(ClientError::IndexOperation { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_absent_index_is_error() {
        let client = client();

        let result = client.delete_index("never-created").await;

        assert!(matches!(result, Err(ClientError::IndexOperation { .. })));
    }

    #[tokio::test]
    async fn test_empty_index_name_is_rejected_before_delegation() {
        let client = client();
        let mapping = IndexMetadata::new("{}");

        assert!(matches!(
            client.create_index("", &mapping).await,
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            client.index_exists("  ").await,
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            client.delete_index("").await,
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            client.create_writer("").await.map(|_| ()),
            Err(ClientError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_reader_query_parse_failure_propagates_unchanged() {
        let client = client();

        let result = client
            .create_reader("logs-2024", Some(r#"{"match": {}, "term": {}}"#))
            .await
            .map(|_| ());

        assert!(matches!(result, Err(ClientError::QueryParse(_))));
    }

    #[tokio::test]
    async fn test_read_all_drains_every_page() {
        let client = client();

        let documents = client.read_all("logs-2024", None).await.unwrap();

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[2]["name"], "gamma");
    }
}
