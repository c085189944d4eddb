//! Cart Store Port - Interface for persisting the checkout cart.
//!
//! The seat map writes the cart when a hold is granted, the checkout view
//! reads it, and a completed purchase removes it. There is a single entry
//! and a single writer.

use async_trait::async_trait;

use crate::domain::checkout::CheckoutCart;

/// Errors that can occur during cart storage operations
#[derive(Debug, thiserror::Error)]
pub enum CartStoreError {
    #[error("Failed to serialize cart: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize cart: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting the checkout cart between views
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Save the cart, replacing any previous one
    ///
    /// # Errors
    /// Returns `CartStoreError` if save fails
    async fn save(&self, cart: &CheckoutCart) -> Result<(), CartStoreError>;

    /// Load the cart
    ///
    /// # Returns
    /// `None` if no selection has been saved
    ///
    /// # Errors
    /// Returns `CartStoreError::DeserializationFailed` if the stored cart is corrupt
    async fn load(&self) -> Result<Option<CheckoutCart>, CartStoreError>;

    /// Remove the cart; removing a missing cart is not an error
    async fn clear(&self) -> Result<(), CartStoreError>;
}
