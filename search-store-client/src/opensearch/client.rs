//! OpenSearch index client implementation.
//!
//! Concrete `IndexStoreProvider` backed by the OpenSearch REST API. Every
//! operation builds its own transport, issues exactly one request, and drops
//! the transport when it returns, on success and on error alike.

use async_trait::async_trait;
use opensearch::indices::{
    IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts, IndicesGetMappingParts,
};
use opensearch::OpenSearch;
use serde_json::Value;
use tracing::{debug, info};

use search_store_shared::IndexMetadata;

use crate::config::StoreOptions;
use crate::errors::ClientError;
use crate::interfaces::{DocumentReader, DocumentWriter, IndexStoreProvider};
use crate::opensearch::queries::resolve_query;
use crate::opensearch::reader::ScrollReader;
use crate::opensearch::transport::TransportFactory;
use crate::opensearch::writer::BulkWriter;

/// OpenSearch-backed index store.
///
/// Holds only immutable options; safe to share across concurrent callers.
///
/// # Example
///
/// ```ignore
/// use search_store_client::{IndexStoreClient, OpenSearchIndexClient, StoreOptions};
/// use search_store_shared::IndexMetadata;
///
/// let provider = OpenSearchIndexClient::new(StoreOptions::default());
/// let client = IndexStoreClient::new(Box::new(provider));
///
/// let mapping = IndexMetadata::new(r#"{"properties":{"ts":{"type":"date"}}}"#);
/// client.create_index("logs-2024", &mapping).await?;
/// assert!(client.index_exists("logs-2024").await?);
/// ```
pub struct OpenSearchIndexClient {
    transport_factory: TransportFactory,
}

impl OpenSearchIndexClient {
    /// Create a client from connection options.
    ///
    /// No connection is made here; transports are created per operation and
    /// connect lazily on their first request.
    pub fn new(options: StoreOptions) -> Self {
        info!(
            endpoint = %options.endpoint(),
            auth = ?options.auth,
            "Created search store client"
        );

        Self {
            transport_factory: TransportFactory::new(options),
        }
    }

    fn options(&self) -> &StoreOptions {
        self.transport_factory.options()
    }

    /// Build a store handle scoped to a single operation.
    async fn acquire(&self) -> Result<OpenSearch, ClientError> {
        let transport = self.transport_factory.create().await?;
        Ok(OpenSearch::new(transport))
    }
}

/// Extract the mapping document for `name` from a get-mapping response.
///
/// The store keys the response body by concrete index name; the `mappings`
/// value is returned as JSON text exactly as reported.
fn mapping_source(body: &Value, name: &str) -> Option<String> {
    let mappings = body.get(name)?.get("mappings")?;
    Some(mappings.to_string())
}

#[async_trait]
impl IndexStoreProvider for OpenSearchIndexClient {
    async fn create_index(
        &self,
        name: &str,
        metadata: &IndexMetadata,
    ) -> Result<(), ClientError> {
        let body: Value = serde_json::from_str(metadata.content()).map_err(|e| {
            ClientError::index_operation("create", name, format!("Metadata is not valid JSON: {}", e))
        })?;

        let client = self.acquire().await?;
        let response = client
            .indices()
            .create(IndicesCreateParts::Index(name))
            .body(body)
            .send()
            .await
            .map_err(|e| ClientError::index_operation("create", name, e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ClientError::index_operation(
                "create",
                name,
                format!("Store returned {}: {}", status, error_body),
            ));
        }

        debug!(index = %name, "Index created");
        Ok(())
    }

    async fn index_exists(&self, name: &str) -> Result<bool, ClientError> {
        let client = self.acquire().await?;
        let response = client
            .indices()
            .exists(IndicesExistsParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| ClientError::index_operation("check", name, e.to_string()))?;

        let status = response.status_code();

        // 404 is the store reporting absence, not a failure
        if status.as_u16() == 404 {
            return Ok(false);
        }
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ClientError::index_operation(
                "check",
                name,
                format!("Store returned {}: {}", status, error_body),
            ));
        }

        Ok(true)
    }

    async fn index_metadata(&self, name: &str) -> Result<IndexMetadata, ClientError> {
        let client = self.acquire().await?;
        let response = client
            .indices()
            .get_mapping(IndicesGetMappingParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| ClientError::index_operation("describe", name, e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ClientError::index_operation(
                "describe",
                name,
                format!("Store returned {}: {}", status, error_body),
            ));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::index_operation("describe", name, e.to_string()))?;

        mapping_source(&body, name)
            .map(IndexMetadata::new)
            .ok_or_else(|| {
                ClientError::index_operation(
                    "describe",
                    name,
                    "Response contained no mappings for the index",
                )
            })
    }

    async fn delete_index(&self, name: &str) -> Result<(), ClientError> {
        let client = self.acquire().await?;
        let response = client
            .indices()
            .delete(IndicesDeleteParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| ClientError::index_operation("delete", name, e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ClientError::index_operation(
                "delete",
                name,
                format!("Store returned {}: {}", status, error_body),
            ));
        }

        debug!(index = %name, "Index deleted");
        Ok(())
    }

    async fn create_reader(
        &self,
        name: &str,
        query: Option<&str>,
    ) -> Result<Box<dyn DocumentReader>, ClientError> {
        let predicate = resolve_query(query)?;
        let client = self.acquire().await?;

        debug!(index = %name, kind = %predicate.kind(), "Created reader");

        // The reader owns the transport from here on
        Ok(Box::new(ScrollReader::new(
            client,
            name.to_string(),
            predicate,
            self.options().scroll_page_size,
            self.options().scroll_keep_alive.clone(),
        )))
    }

    async fn create_writer(&self, name: &str) -> Result<Box<dyn DocumentWriter>, ClientError> {
        let client = self.acquire().await?;

        debug!(index = %name, policy = ?self.options().refresh_policy, "Created writer");

        Ok(Box::new(BulkWriter::new(
            client,
            name.to_string(),
            self.options().refresh_policy,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mapping_source_extracts_index_mappings() {
        let body = json!({
            "logs-2024": {
                "mappings": {
                    "properties": {
                        "ts": { "type": "date" }
                    }
                }
            }
        });

        let source = mapping_source(&body, "logs-2024").unwrap();

        let parsed: Value = serde_json::from_str(&source).unwrap();
        assert_eq!(parsed["properties"]["ts"]["type"], "date");
    }

    #[test]
    fn test_mapping_source_missing_index() {
        let body = json!({ "other-index": { "mappings": {} } });

        assert!(mapping_source(&body, "logs-2024").is_none());
    }

    #[test]
    fn test_mapping_source_missing_mappings_key() {
        let body = json!({ "logs-2024": { "settings": {} } });

        assert!(mapping_source(&body, "logs-2024").is_none());
    }
}
