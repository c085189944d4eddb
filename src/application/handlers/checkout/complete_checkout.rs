//! CompleteCheckoutHandler - Command handler for finishing the purchase.

use std::sync::Arc;

use crate::application::{Navigation, StorefrontError, UserAction};
use crate::domain::foundation::BuyerId;
use crate::ports::{CartStore, CompleteCheckoutRequest, TicketingBackend};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteCheckoutOutcome {
    /// No cart to pay for; no request was made.
    NoSelection,
    Completed { navigation: Navigation },
}

/// Handler for completing checkout.
///
/// The cart is removed only after the backend accepts the purchase, so a
/// failed attempt can be retried from the same checkout view.
pub struct CompleteCheckoutHandler {
    backend: Arc<dyn TicketingBackend>,
    cart_store: Arc<dyn CartStore>,
    buyer_id: BuyerId,
}

impl CompleteCheckoutHandler {
    pub fn new(
        backend: Arc<dyn TicketingBackend>,
        cart_store: Arc<dyn CartStore>,
        buyer_id: BuyerId,
    ) -> Self {
        Self {
            backend,
            cart_store,
            buyer_id,
        }
    }

    pub async fn handle(&self) -> Result<CompleteCheckoutOutcome, StorefrontError> {
        // 1. Load the handed-off cart
        let Some(cart) = self.cart_store.load().await? else {
            return Ok(CompleteCheckoutOutcome::NoSelection);
        };

        // 2. Finalize with the backend
        let request = CompleteCheckoutRequest {
            group_id: cart.group_id.clone(),
            buyer_id: self.buyer_id.clone(),
        };
        self.backend.complete_checkout(request).await.map_err(|e| {
            tracing::error!(group_id = %cart.group_id, error = %e, "Checkout failed");
            StorefrontError::backend(UserAction::CompleteCheckout, e)
        })?;

        // 3. Drop the cart
        self.cart_store.clear().await?;

        Ok(CompleteCheckoutOutcome::Completed {
            navigation: Navigation::CheckoutSuccess,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backend::{Endpoint, InMemoryTicketingBackend};
    use crate::adapters::storage::InMemoryCartStore;
    use crate::domain::checkout::CheckoutCart;
    use crate::domain::foundation::{EventId, GroupId, SeatId};
    use crate::domain::queue::QueueMode;
    use crate::domain::seating::mock_seats;
    use crate::ports::{BackendError, CreateGroupRequest, LockSeatsRequest};

    fn buyer() -> BuyerId {
        BuyerId::new("demo-buyer-1").unwrap()
    }

    /// Joins, holds 101-A-1 and returns the matching cart.
    async fn held_cart(backend: &InMemoryTicketingBackend) -> CheckoutCart {
        let group_id = backend
            .create_group(CreateGroupRequest {
                event_id: EventId::new("demo-event").unwrap(),
                buyer1_id: BuyerId::new("demo-user-1").unwrap(),
                mode: QueueMode::Solo,
            })
            .await
            .unwrap()
            .group_id;
        let lock = backend
            .lock_seats(LockSeatsRequest {
                group_id: group_id.clone(),
                ticket_ids: vec![SeatId::new("101-A-1").unwrap()],
            })
            .await
            .unwrap();
        CheckoutCart::new(group_id, lock.expires_at, vec![mock_seats()[0].clone()])
    }

    #[tokio::test]
    async fn no_cart_makes_no_request() {
        let backend = InMemoryTicketingBackend::new();
        let handler = CompleteCheckoutHandler::new(
            Arc::new(backend.clone()),
            Arc::new(InMemoryCartStore::new()),
            buyer(),
        );

        assert_eq!(handler.handle().await.unwrap(), CompleteCheckoutOutcome::NoSelection);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn success_clears_cart_and_navigates() {
        let backend = InMemoryTicketingBackend::new();
        let store = InMemoryCartStore::with_cart(held_cart(&backend).await);
        let handler =
            CompleteCheckoutHandler::new(Arc::new(backend.clone()), Arc::new(store.clone()), buyer());

        let outcome = handler.handle().await.unwrap();

        assert_eq!(
            outcome,
            CompleteCheckoutOutcome::Completed { navigation: Navigation::CheckoutSuccess }
        );
        assert!(store.is_empty().await);
        assert!(backend.is_sold(
            &EventId::new("demo-event").unwrap(),
            &SeatId::new("101-A-1").unwrap()
        ));
    }

    #[tokio::test]
    async fn failure_keeps_cart() {
        let backend = InMemoryTicketingBackend::new();
        let store = InMemoryCartStore::with_cart(held_cart(&backend).await);
        backend.fail_next(
            Endpoint::CompleteCheckout,
            BackendError::rejected(402, "Payment declined"),
        );
        let handler =
            CompleteCheckoutHandler::new(Arc::new(backend), Arc::new(store.clone()), buyer());

        let err = handler.handle().await.unwrap_err();

        assert_eq!(err.user_message(), "Payment declined");
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn stale_cart_is_rejected_by_backend() {
        let backend = InMemoryTicketingBackend::new();
        let stale = CheckoutCart::new(
            GroupId::new("gone").unwrap(),
            crate::domain::foundation::Timestamp::now(),
            vec![],
        );
        let store = InMemoryCartStore::with_cart(stale);
        let handler =
            CompleteCheckoutHandler::new(Arc::new(backend), Arc::new(store.clone()), buyer());

        let err = handler.handle().await.unwrap_err();

        assert_eq!(err.user_message(), "Group not found");
        assert!(!store.is_empty().await);
    }
}
