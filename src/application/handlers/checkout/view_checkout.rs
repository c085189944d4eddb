//! ViewCheckoutHandler - Query handler for the checkout view.

use std::sync::Arc;

use crate::application::StorefrontError;
use crate::domain::checkout::{CheckoutCart, Countdown};
use crate::domain::foundation::Timestamp;
use crate::ports::CartStore;

/// What the checkout view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutView {
    /// No hold has been handed off.
    Empty,
    Ready {
        cart: CheckoutCart,
        countdown: Countdown,
    },
}

impl CheckoutView {
    pub const EMPTY_MESSAGE: &'static str = "No seat selection found.";

    pub fn cart(&self) -> Option<&CheckoutCart> {
        match self {
            Self::Empty => None,
            Self::Ready { cart, .. } => Some(cart),
        }
    }
}

/// Handler for reading the cart and its countdown.
pub struct ViewCheckoutHandler {
    cart_store: Arc<dyn CartStore>,
}

impl ViewCheckoutHandler {
    pub fn new(cart_store: Arc<dyn CartStore>) -> Self {
        Self { cart_store }
    }

    pub async fn handle(&self) -> Result<CheckoutView, StorefrontError> {
        self.handle_at(Timestamp::now()).await
    }

    /// Same as [`handle`](Self::handle) with an explicit clock.
    pub async fn handle_at(&self, now: Timestamp) -> Result<CheckoutView, StorefrontError> {
        let view = match self.cart_store.load().await? {
            None => CheckoutView::Empty,
            Some(cart) => {
                let countdown = cart.countdown_at(now);
                CheckoutView::Ready { cart, countdown }
            }
        };
        Ok(view)
    }
}
