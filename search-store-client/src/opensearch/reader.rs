//! Scroll-backed document reader.

use async_trait::async_trait;
use opensearch::{ClearScrollParts, OpenSearch, ScrollParts, SearchParts};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::ClientError;
use crate::interfaces::DocumentReader;
use crate::opensearch::queries::QueryPredicate;

/// Streams documents out of an index page by page using the scroll API.
///
/// The reader owns the transport handed to it at creation; dropping it
/// releases the connection. `close` additionally clears the server-side
/// scroll context.
pub struct ScrollReader {
    client: OpenSearch,
    index: String,
    predicate: QueryPredicate,
    page_size: i64,
    keep_alive: String,
    scroll_id: Option<String>,
    exhausted: bool,
}

impl ScrollReader {
    pub(crate) fn new(
        client: OpenSearch,
        index: String,
        predicate: QueryPredicate,
        page_size: i64,
        keep_alive: String,
    ) -> Self {
        Self {
            client,
            index,
            predicate,
            page_size,
            keep_alive,
            scroll_id: None,
            exhausted: false,
        }
    }

    /// Open the scroll with the resolved predicate and fetch the first page.
    async fn first_page(&self) -> Result<Value, ClientError> {
        let response = self
            .client
            .search(SearchParts::Index(&[&self.index]))
            .scroll(&self.keep_alive)
            .size(self.page_size)
            .body(json!({ "query": self.predicate.to_value() }))
            .send()
            .await
            .map_err(|e| ClientError::index_operation("read", &self.index, e.to_string()))?;

        read_page_body(response, &self.index).await
    }

    /// Continue an open scroll cursor.
    async fn next_page(&self, scroll_id: &str) -> Result<Value, ClientError> {
        let response = self
            .client
            .scroll(ScrollParts::None)
            .body(json!({ "scroll": self.keep_alive, "scroll_id": scroll_id }))
            .send()
            .await
            .map_err(|e| ClientError::index_operation("read", &self.index, e.to_string()))?;

        read_page_body(response, &self.index).await
    }
}

async fn read_page_body(
    response: opensearch::http::response::Response,
    index: &str,
) -> Result<Value, ClientError> {
    let status = response.status_code();
    if !status.is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(ClientError::index_operation(
            "read",
            index,
            format!("Store returned {}: {}", status, error_body),
        ));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ClientError::index_operation("read", index, e.to_string()))
}

/// Pull the scroll cursor and document sources out of a response page.
fn extract_page(body: &Value) -> (Option<String>, Vec<Value>) {
    let scroll_id = body
        .get("_scroll_id")
        .and_then(Value::as_str)
        .map(str::to_string);

    let documents = body["hits"]["hits"]
        .as_array()
        .map(|hits| {
            hits.iter()
                .filter_map(|hit| hit.get("_source").cloned())
                .collect()
        })
        .unwrap_or_default();

    (scroll_id, documents)
}

#[async_trait]
impl DocumentReader for ScrollReader {
    async fn next_batch(&mut self) -> Result<Option<Vec<Value>>, ClientError> {
        if self.exhausted {
            return Ok(None);
        }

        let body = match self.scroll_id.clone() {
            None => self.first_page().await?,
            Some(scroll_id) => self.next_page(&scroll_id).await?,
        };

        let (scroll_id, documents) = extract_page(&body);
        if scroll_id.is_some() {
            self.scroll_id = scroll_id;
        }

        if documents.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }

        debug!(index = %self.index, count = documents.len(), "Fetched page");
        Ok(Some(documents))
    }

    async fn close(&mut self) -> Result<(), ClientError> {
        self.exhausted = true;

        if let Some(scroll_id) = self.scroll_id.take() {
            self.client
                .clear_scroll(ClearScrollParts::None)
                .body(json!({ "scroll_id": [scroll_id] }))
                .send()
                .await
                .map_err(|e| ClientError::index_operation("read", &self.index, e.to_string()))?;

            debug!(index = %self.index, "Cleared scroll context");
        }

        Ok(())
    }
}
