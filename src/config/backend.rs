//! Ticketing backend configuration

use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::BuyerId;

use super::error::ValidationError;
use super::Environment;

/// Backend connection and storefront identities
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the ticketing API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Buyer placed in new groups
    #[serde(default = "default_buyer_id")]
    pub buyer_id: String,

    /// Buyer named when completing checkout
    #[serde(default = "default_checkout_buyer_id")]
    pub checkout_buyer_id: String,
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn buyer_id(&self) -> Result<BuyerId, ValidationError> {
        parse_buyer("buyer_id", &self.buyer_id)
    }

    pub fn checkout_buyer_id(&self) -> Result<BuyerId, ValidationError> {
        parse_buyer("checkout_buyer_id", &self.checkout_buyer_id)
    }

    /// Validate backend configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("backend.base_url"));
        }
        let is_https = self.base_url.starts_with("https://");
        if !is_https && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if *environment == Environment::Production && !is_https {
            return Err(ValidationError::BackendMustBeHttps);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.buyer_id()?;
        self.checkout_buyer_id()?;
        Ok(())
    }
}

fn parse_buyer(field: &'static str, raw: &str) -> Result<BuyerId, ValidationError> {
    BuyerId::new(raw).map_err(|e| ValidationError::InvalidBuyerId {
        field,
        reason: e.to_string(),
    })
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            buyer_id: default_buyer_id(),
            checkout_buyer_id: default_checkout_buyer_id(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.ticketfangrub.com".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_buyer_id() -> String {
    "demo-user-1".to_string()
}

fn default_checkout_buyer_id() -> String {
    "demo-buyer-1".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "https://api.ticketfangrub.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.buyer_id().unwrap().as_str(), "demo-user-1");
        assert_eq!(config.checkout_buyer_id().unwrap().as_str(), "demo-buyer-1");
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = BackendConfig {
            base_url: "ftp://tickets.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidBackendUrl)
        );
    }

    #[test]
    fn test_plain_http_only_outside_production() {
        let config = BackendConfig {
            base_url: "http://localhost:8000".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::BackendMustBeHttps)
        );
    }

    #[test]
    fn test_timeout_bounds() {
        for secs in [0, 301] {
            let config = BackendConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(
                config.validate(&Environment::Development),
                Err(ValidationError::InvalidTimeout)
            );
        }
    }

    #[test]
    fn test_rejects_unusable_buyer_id() {
        let config = BackendConfig {
            buyer_id: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidBuyerId { field: "buyer_id", .. })
        ));
    }
}
