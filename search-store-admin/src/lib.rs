//! # Search Store Admin
//!
//! Command-line tool for managing search store indices: create, check,
//! describe, and delete, wired from environment configuration.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur while running the admin tool.
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from the store client.
    #[error("Client error: {0}")]
    ClientError(#[from] search_store_client::ClientError),

    /// The command line was not understood.
    #[error("Usage error: {0}")]
    UsageError(String),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AdminError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::UsageError(msg.into())
    }
}
