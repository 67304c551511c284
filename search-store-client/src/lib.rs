//! # Search Store Client
//!
//! This crate provides a client for managing the lifecycle of named indices
//! in a remote search store and for streaming documents in and out. It
//! includes the error taxonomy, abstract interfaces, and a concrete
//! implementation for OpenSearch with optional AWS SigV4 request signing.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use crate::client::IndexStoreClient;
pub use crate::config::{AuthMode, StoreOptions};
pub use crate::errors::ClientError;
pub use crate::interfaces::{DocumentReader, DocumentWriter, IndexStoreProvider};
pub use crate::opensearch::OpenSearchIndexClient;
