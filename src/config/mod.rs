//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TICKETFANGRUB` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working demo setup.
//!
//! # Example
//!
//! ```no_run
//! use ticketfangrub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.backend.base_url);
//! ```

mod backend;
mod client;
mod error;
mod polling;
mod storage;

pub use backend::BackendConfig;
pub use client::{ClientConfig, Environment};
pub use error::{ConfigError, ValidationError};
pub use polling::PollingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::application::StorefrontSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ticketing backend (URL, timeout, buyer identities)
    #[serde(default)]
    pub backend: BackendConfig,

    /// Checkout cart storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Live view refresh periods
    #[serde(default)]
    pub polling: PollingConfig,

    /// Environment and logging
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TICKETFANGRUB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TICKETFANGRUB__BACKEND__BASE_URL=http://localhost:8000` -> `backend.base_url`
    /// - `TICKETFANGRUB__POLLING__QUEUE_POSITION_SECS=10` -> `polling.queue_position_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TICKETFANGRUB")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backend.validate(&self.client.environment)?;
        self.storage.validate()?;
        self.polling.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.client.is_production()
    }

    /// Identities and timer periods for the storefront flow.
    pub fn storefront_settings(&self) -> Result<StorefrontSettings, ValidationError> {
        Ok(StorefrontSettings {
            buyer_id: self.backend.buyer_id()?,
            checkout_buyer_id: self.backend.checkout_buyer_id()?,
            queue_poll_period: self.polling.queue_position_period(),
            countdown_period: self.polling.countdown_period(),
        })
    }
}
