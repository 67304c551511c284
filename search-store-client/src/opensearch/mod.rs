//! OpenSearch implementation of the index store interfaces.
//!
//! This module provides the concrete client, transport construction, query
//! resolution, and the scroll reader / bulk writer collaborators.

mod auth;
mod client;
mod queries;
mod reader;
mod transport;
mod writer;

pub use auth::AuthStrategy;
pub use client::OpenSearchIndexClient;
pub use queries::{resolve_query, QueryPredicate};
pub use reader::ScrollReader;
pub use transport::TransportFactory;
pub use writer::BulkWriter;
