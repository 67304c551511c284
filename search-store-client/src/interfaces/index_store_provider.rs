//! Index store provider trait definition.
//!
//! This module defines the abstract interface for index lifecycle and
//! document access operations, allowing for different backend
//! implementations.

use async_trait::async_trait;

use crate::errors::ClientError;
use crate::interfaces::{DocumentReader, DocumentWriter};
use search_store_shared::IndexMetadata;

/// Abstracts the underlying index store implementation.
///
/// Implementations are injected into `IndexStoreClient` to enable dependency
/// injection and easy testing with mock implementations. Operations are
/// independent: no state is shared between calls, so concurrent callers may
/// invoke any mix of them on one instance.
///
/// All methods return `Result<T, ClientError>` for consistent error handling
/// across backends.
#[async_trait]
pub trait IndexStoreProvider: Send + Sync {
    /// Create an index with the given metadata as its mappings/settings body.
    ///
    /// The metadata JSON is supplied to the store verbatim.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the store acknowledged the creation
    /// * `Err(ClientError::IndexOperation)` - On transport failure, malformed
    ///   metadata JSON, or a name conflict
    async fn create_index(&self, name: &str, metadata: &IndexMetadata)
        -> Result<(), ClientError>;

    /// Check whether an index exists.
    ///
    /// Absence is a normal `false`, never an error; only transport/IO
    /// failures produce `Err`.
    async fn index_exists(&self, name: &str) -> Result<bool, ClientError>;

    /// Fetch an index's mapping document as the store reports it.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexMetadata)` - The mapping JSON text
    /// * `Err(ClientError::IndexOperation)` - If the index is absent or the
    ///   transport fails
    async fn index_metadata(&self, name: &str) -> Result<IndexMetadata, ClientError>;

    /// Delete an index.
    ///
    /// Deleting an absent index is an error, matching the store's behavior.
    async fn delete_index(&self, name: &str) -> Result<(), ClientError>;

    /// Create a reader streaming documents that match `query`.
    ///
    /// A `None` or blank query reads the whole index (match-all). The reader
    /// owns its transport and cursor state from this point on. Query
    /// resolution failures surface as `ClientError::QueryParse`, unchanged.
    async fn create_reader(
        &self,
        name: &str,
        query: Option<&str>,
    ) -> Result<Box<dyn DocumentReader>, ClientError>;

    /// Create a writer streaming documents into the index under the
    /// configured refresh policy.
    ///
    /// The writer owns its transport from this point on.
    async fn create_writer(&self, name: &str) -> Result<Box<dyn DocumentWriter>, ClientError>;
}
