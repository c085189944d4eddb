//! File-based Cart Store Adapter
//!
//! Stores the checkout cart as a single JSON file on disk, the CLI's
//! counterpart of the browser's local storage entry.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::checkout::CheckoutCart;
use crate::ports::{CartStore, CartStoreError};

/// File-based storage for the checkout cart
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    /// Create a new file store writing to `path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileCartStore::new(".ticketfangrub/checkout_data.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the cart file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    async fn ensure_parent(&self) -> Result<(), CartStoreError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .await
                .map_err(|e| CartStoreError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CartStore for FileCartStore {
    async fn save(&self, cart: &CheckoutCart) -> Result<(), CartStoreError> {
        self.ensure_parent().await?;

        let json = serde_json::to_string_pretty(cart)
            .map_err(|e| CartStoreError::SerializationFailed(e.to_string()))?;

        // Write beside the target then rename so readers never see half a file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .await
            .map_err(|e| CartStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CartStoreError::IoError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), group_id = %cart.group_id, "Saved checkout cart");
        Ok(())
    }

    async fn load(&self) -> Result<Option<CheckoutCart>, CartStoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CartStoreError::IoError(e.to_string())),
        };

        let cart = serde_json::from_str(&json)
            .map_err(|e| CartStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(cart))
    }

    async fn clear(&self) -> Result<(), CartStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Cleared checkout cart");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CartStoreError::IoError(e.to_string())),
        }
    }
}
