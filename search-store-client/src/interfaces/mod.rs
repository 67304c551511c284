//! Interface definitions for the index store.
//!
//! These traits seam the store backend from calling code, allowing mock
//! implementations in tests and alternate backends later.

mod document_io;
mod index_store_provider;

pub use document_io::{DocumentReader, DocumentWriter};
pub use index_store_provider::IndexStoreProvider;
