//! Transport construction.
//!
//! Builds the per-operation transport from connection options. Signed
//! transports attach SigV4 request signing; unsigned transports attach
//! nothing.

use opensearch::auth::Credentials;
use opensearch::http::transport::{SingleNodeConnectionPool, Transport, TransportBuilder};
use tracing::debug;
use url::Url;

use crate::config::StoreOptions;
use crate::errors::ClientError;
use crate::opensearch::auth::AuthStrategy;

/// Service identifier used for SigV4 signing of store requests.
const SIGNING_SERVICE: &str = "es";

/// Builds transports from the client options.
///
/// Every lifecycle operation and every reader/writer gets its own transport;
/// dropping it releases the connection. The transport connects lazily, on
/// its first request.
#[derive(Debug, Clone)]
pub struct TransportFactory {
    options: StoreOptions,
}

impl TransportFactory {
    /// Create a factory over immutable connection options.
    pub fn new(options: StoreOptions) -> Self {
        Self { options }
    }

    /// The options this factory builds from.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Create a transport scoped to a single operation.
    ///
    /// The auth strategy is re-derived on every call, so configuration
    /// problems surface here rather than at client construction. The SigV4
    /// path resolves the ambient AWS credential chain for the configured
    /// region.
    pub async fn create(&self) -> Result<Transport, ClientError> {
        let auth = AuthStrategy::from_options(&self.options)?;

        let endpoint = self.options.endpoint();
        let url = Url::parse(&endpoint)
            .map_err(|e| ClientError::config(format!("Invalid endpoint {}: {}", endpoint, e)))?;

        let conn_pool = SingleNodeConnectionPool::new(url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

        if let AuthStrategy::SigV4 { region } = &auth {
            let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(region.clone()))
                .load()
                .await;
            let credentials = Credentials::try_from(sdk_config).map_err(|e| {
                ClientError::config(format!("Failed to resolve SigV4 credentials: {}", e))
            })?;
            builder = builder.auth(credentials).service_name(SIGNING_SERVICE);
        }

        debug!(endpoint = %endpoint, signed = auth.is_signed(), "Built transport");

        builder
            .build()
            .map_err(|e| ClientError::config(format!("Failed to build transport: {}", e)))
    }
}
