//! Document reader and writer trait definitions.
//!
//! Readers and writers own the transport handed to them at creation and
//! manage their own cursor/batching state. The client that created them
//! plays no further part in their lifecycle.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ClientError;

/// Streams documents out of an index, one page at a time.
#[async_trait]
pub trait DocumentReader: Send {
    /// Fetch the next page of documents.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(documents))` - The next non-empty page of document sources
    /// * `Ok(None)` - The result set is exhausted
    /// * `Err(ClientError::IndexOperation)` - If the fetch fails
    async fn next_batch(&mut self) -> Result<Option<Vec<Value>>, ClientError>;

    /// Release any server-side cursor state.
    ///
    /// Reading past exhaustion after a close returns `Ok(None)`.
    async fn close(&mut self) -> Result<(), ClientError>;
}

/// Streams documents into an index in batches.
#[async_trait]
pub trait DocumentWriter: Send {
    /// Buffer a document for the next flush.
    fn write(&mut self, document: Value);

    /// Send all buffered documents to the store.
    ///
    /// A flush with nothing buffered is a no-op.
    async fn flush(&mut self) -> Result<(), ClientError>;

    /// Flush any remaining documents and release resources.
    async fn close(&mut self) -> Result<(), ClientError>;
}
