//! Client error taxonomy.
//!
//! Every failure a caller can see is one of three kinds: bad configuration,
//! an unparseable query, or a failed index operation. No operation performs
//! local recovery or retries; errors are wrapped with context and surfaced.

use thiserror::Error;

/// Errors that can occur during search store operations.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Invalid or inconsistent configuration (e.g., SigV4 auth without a
    /// region, a malformed endpoint, an empty index name).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or ambiguous query DSL text.
    #[error("Query parse error: {0}")]
    QueryParse(String),

    /// A lifecycle or document operation against the store failed.
    #[error("Failed to {operation} index '{index}': {message}")]
    IndexOperation {
        /// The operation that failed (create, check, describe, delete,
        /// read, write).
        operation: String,
        /// The index the operation targeted.
        index: String,
        /// The underlying transport or store-reported cause.
        message: String,
    },
}

impl ClientError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a query parse error.
    pub fn query_parse(msg: impl Into<String>) -> Self {
        Self::QueryParse(msg.into())
    }

    /// Create an index operation error.
    pub fn index_operation(
        operation: impl Into<String>,
        index: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::IndexOperation {
            operation: operation.into(),
            index: index.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_operation_display_carries_context() {
        let error = ClientError::index_operation("create", "logs-2024", "connection refused");

        assert_eq!(
            error.to_string(),
            "Failed to create index 'logs-2024': connection refused"
        );
    }

    #[test]
    fn test_config_display() {
        let error = ClientError::config("SigV4 authentication requires a region");

        assert!(error.to_string().starts_with("Configuration error:"));
    }
}
