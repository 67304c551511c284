//! Configuration types for the search store client.

use search_store_shared::RefreshPolicy;

/// Authentication mode for outgoing store requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Send requests unsigned.
    #[default]
    None,
    /// Sign every request with AWS SigV4 using the process's default
    /// credential chain.
    SigV4,
}

/// Connection options for the search store.
///
/// Constructed once and immutable for the client's lifetime. Operations
/// never share connection state; each builds its own transport from these
/// options.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Store host name.
    pub host: String,
    /// Store port.
    pub port: u16,
    /// URL scheme, "http" or "https".
    pub scheme: String,
    /// Authentication mode for outgoing requests.
    pub auth: AuthMode,
    /// AWS region for SigV4 signing. Required when auth is SigV4.
    pub region: Option<String>,
    /// Refresh policy applied by document writers.
    pub refresh_policy: RefreshPolicy,
    /// Number of documents fetched per reader page.
    pub scroll_page_size: i64,
    /// Keep-alive for the reader's scroll context (store duration string,
    /// e.g. "1m").
    pub scroll_keep_alive: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9200,
            scheme: "http".to_string(),
            auth: AuthMode::None,
            region: None,
            refresh_policy: RefreshPolicy::default(),
            scroll_page_size: 100,
            scroll_keep_alive: "1m".to_string(),
        }
    }
}

impl StoreOptions {
    /// The store endpoint URL these options describe.
    pub fn endpoint(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
