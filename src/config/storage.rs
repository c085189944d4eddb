//! Cart storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the checkout cart is kept between commands
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the cart JSON file
    #[serde(default = "default_cart_path")]
    pub cart_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cart_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.cart_path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_path: default_cart_path(),
        }
    }
}

fn default_cart_path() -> PathBuf {
    PathBuf::from(".ticketfangrub").join("checkout_data.json")
}
