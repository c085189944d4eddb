//! In-Memory Cart Store Adapter
//!
//! Keeps the checkout cart in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::checkout::CheckoutCart;
use crate::ports::{CartStore, CartStoreError};

/// In-memory storage for the checkout cart
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStore {
    cart: Arc<RwLock<Option<CheckoutCart>>>,
}

impl InMemoryCartStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a cart
    pub fn with_cart(cart: CheckoutCart) -> Self {
        Self {
            cart: Arc::new(RwLock::new(Some(cart))),
        }
    }

    /// Whether a cart is currently stored (useful for tests)
    pub async fn is_empty(&self) -> bool {
        self.cart.read().await.is_none()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn save(&self, cart: &CheckoutCart) -> Result<(), CartStoreError> {
        *self.cart.write().await = Some(cart.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<CheckoutCart>, CartStoreError> {
        Ok(self.cart.read().await.clone())
    }

    async fn clear(&self) -> Result<(), CartStoreError> {
        *self.cart.write().await = None;
        Ok(())
    }
}
