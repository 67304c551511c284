//! Dependency initialization and wiring for the admin tool.

use std::env;

use tracing::info;

use crate::AdminError;
use search_store_client::{AuthMode, IndexStoreClient, OpenSearchIndexClient, StoreOptions};
use search_store_shared::RefreshPolicy;

/// Default store host.
const DEFAULT_HOST: &str = "localhost";

/// Default store port.
const DEFAULT_PORT: u16 = 9200;

/// Default URL scheme.
const DEFAULT_SCHEME: &str = "http";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured index store client.
    pub client: IndexStoreClient,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEARCH_STORE_HOST`: store host (default: localhost)
    /// - `SEARCH_STORE_PORT`: store port (default: 9200)
    /// - `SEARCH_STORE_SCHEME`: "http" or "https" (default: http)
    /// - `SEARCH_STORE_AUTH`: "none" or "sigv4" (default: none)
    /// - `SEARCH_STORE_REGION`: AWS region, required for sigv4
    /// - `SEARCH_STORE_REFRESH`: "false", "true", or "wait_for"
    ///   (default: false)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AdminError)` - If an environment value fails to parse
    pub fn new() -> Result<Self, AdminError> {
        let options = options_from_env()?;

        info!(
            endpoint = %options.endpoint(),
            auth = ?options.auth,
            "Initializing dependencies"
        );

        let provider = OpenSearchIndexClient::new(options);
        let client = IndexStoreClient::new(Box::new(provider));

        Ok(Self { client })
    }
}

fn options_from_env() -> Result<StoreOptions, AdminError> {
    let host = env::var("SEARCH_STORE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = match env::var("SEARCH_STORE_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| AdminError::config(format!("Invalid SEARCH_STORE_PORT: {}", e)))?,
        Err(_) => DEFAULT_PORT,
    };
    let scheme = env::var("SEARCH_STORE_SCHEME").unwrap_or_else(|_| DEFAULT_SCHEME.to_string());
    let auth = match env::var("SEARCH_STORE_AUTH") {
        Ok(raw) => parse_auth_mode(&raw)?,
        Err(_) => AuthMode::None,
    };
    let region = env::var("SEARCH_STORE_REGION").ok();
    let refresh_policy = match env::var("SEARCH_STORE_REFRESH") {
        Ok(raw) => raw.parse::<RefreshPolicy>().map_err(AdminError::config)?,
        Err(_) => RefreshPolicy::default(),
    };

    Ok(StoreOptions {
        host,
        port,
        scheme,
        auth,
        region,
        refresh_policy,
        ..StoreOptions::default()
    })
}

fn parse_auth_mode(raw: &str) -> Result<AuthMode, AdminError> {
    match raw.trim().to_lowercase().as_str() {
        "none" => Ok(AuthMode::None),
        "sigv4" => Ok(AuthMode::SigV4),
        other => Err(AdminError::config(format!(
            "Unknown SEARCH_STORE_AUTH: {}",
            other
        ))),
    }
}
