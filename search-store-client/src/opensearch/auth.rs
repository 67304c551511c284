//! Authentication strategy selection.

use crate::config::{AuthMode, StoreOptions};
use crate::errors::ClientError;

/// How outgoing transport requests authenticate against the store.
///
/// Derived from the client options when a transport is built, so call sites
/// never branch on the auth mode themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStrategy {
    /// Requests go out unsigned.
    Unsigned,
    /// Requests carry an AWS SigV4 signature computed with the process's
    /// default credential chain for the given region.
    SigV4 {
        /// The signing region.
        region: String,
    },
}

impl AuthStrategy {
    /// Derive the strategy from client options.
    ///
    /// Pure function of configuration: no side effects, no credential
    /// lookups. Fails when SigV4 is requested without a region.
    pub fn from_options(options: &StoreOptions) -> Result<Self, ClientError> {
        match options.auth {
            AuthMode::None => Ok(AuthStrategy::Unsigned),
            AuthMode::SigV4 => match options.region.as_deref().map(str::trim) {
                Some(region) if !region.is_empty() => Ok(AuthStrategy::SigV4 {
                    region: region.to_string(),
                }),
                _ => Err(ClientError::config(
                    "SigV4 authentication requires a region",
                )),
            },
        }
    }

    /// Whether requests built under this strategy are signed.
    pub fn is_signed(&self) -> bool {
        matches!(self, AuthStrategy::SigV4 { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_mode_is_unsigned() {
        let options = StoreOptions::default();

        let strategy = AuthStrategy::from_options(&options).unwrap();

        assert_eq!(strategy, AuthStrategy::Unsigned);
        assert!(!strategy.is_signed());
    }

    #[test]
    fn test_sigv4_mode_carries_region() {
        let options = StoreOptions {
            auth: AuthMode::SigV4,
            region: Some("eu-west-1".to_string()),
            ..StoreOptions::default()
        };

        let strategy = AuthStrategy::from_options(&options).unwrap();

        assert_eq!(
            strategy,
            AuthStrategy::SigV4 {
                region: "eu-west-1".to_string()
            }
        );
        assert!(strategy.is_signed());
    }

    #[test]
    fn test_sigv4_without_region_is_config_error() {
        let options = StoreOptions {
            auth: AuthMode::SigV4,
            region: None,
            ..StoreOptions::default()
        };

        let result = AuthStrategy::from_options(&options);

        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_sigv4_with_blank_region_is_config_error() {
        let options = StoreOptions {
            auth: AuthMode::SigV4,
            region: Some("   ".to_string()),
            ..StoreOptions::default()
        };

        assert!(AuthStrategy::from_options(&options).is_err());
    }

    #[test]
    fn test_region_ignored_when_unsigned() {
        let options = StoreOptions {
            auth: AuthMode::None,
            region: Some("us-east-1".to_string()),
            ..StoreOptions::default()
        };

        assert_eq!(
            AuthStrategy::from_options(&options).unwrap(),
            AuthStrategy::Unsigned
        );
    }
}
