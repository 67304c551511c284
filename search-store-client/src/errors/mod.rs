//! Error types for the search store client.

mod client_error;

pub use client_error::ClientError;
