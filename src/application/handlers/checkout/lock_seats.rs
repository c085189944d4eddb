//! LockSeatsHandler - Command handler for holding the selected seats.

use std::sync::Arc;

use crate::application::{Navigation, StorefrontError, UserAction};
use crate::domain::checkout::CheckoutCart;
use crate::domain::foundation::{EventId, GroupId};
use crate::domain::seating::Seat;
use crate::ports::{CartStore, LockSeatsRequest, TicketingBackend};

/// Command to hold seats for a group.
#[derive(Debug, Clone)]
pub struct LockSeatsCommand {
    pub event_id: EventId,
    pub group_id: GroupId,
    /// Selected seats, in selection order.
    pub seats: Vec<Seat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockSeatsOutcome {
    /// Nothing was selected; no request was made.
    NothingSelected,
    Locked {
        cart: CheckoutCart,
        navigation: Navigation,
    },
}

/// Handler for locking seats.
///
/// A granted hold is written to the cart store for the checkout view.
pub struct LockSeatsHandler {
    backend: Arc<dyn TicketingBackend>,
    cart_store: Arc<dyn CartStore>,
}

impl LockSeatsHandler {
    pub fn new(backend: Arc<dyn TicketingBackend>, cart_store: Arc<dyn CartStore>) -> Self {
        Self {
            backend,
            cart_store,
        }
    }

    pub async fn handle(&self, cmd: LockSeatsCommand) -> Result<LockSeatsOutcome, StorefrontError> {
        if cmd.seats.is_empty() {
            return Ok(LockSeatsOutcome::NothingSelected);
        }

        // 1. Ask the backend for the hold
        let request = LockSeatsRequest {
            group_id: cmd.group_id.clone(),
            ticket_ids: cmd.seats.iter().map(|s| s.id.clone()).collect(),
        };
        let response = self.backend.lock_seats(request).await.map_err(|e| {
            tracing::error!(group_id = %cmd.group_id, error = %e, "Seat lock failed");
            StorefrontError::backend(UserAction::LockSeats, e)
        })?;

        // 2. Hand off to checkout
        let cart = CheckoutCart::new(cmd.group_id, response.expires_at, cmd.seats);
        self.cart_store.save(&cart).await?;

        Ok(LockSeatsOutcome::Locked {
            cart,
            navigation: Navigation::Checkout {
                event_id: cmd.event_id,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backend::{Endpoint, InMemoryTicketingBackend};
    use crate::adapters::storage::InMemoryCartStore;
    use crate::domain::foundation::{BuyerId, Money, SeatId};
    use crate::domain::queue::QueueMode;
    use crate::domain::seating::mock_seats;
    use crate::ports::{BackendError, CreateGroupRequest};

    fn event() -> EventId {
        EventId::new("demo-event").unwrap()
    }

    fn seats(ids: &[&str]) -> Vec<Seat> {
        ids.iter()
            .map(|id| {
                mock_seats()
                    .iter()
                    .find(|s| s.id == SeatId::new(*id).unwrap())
                    .cloned()
                    .unwrap()
            })
            .collect()
    }

    async fn join(backend: &InMemoryTicketingBackend) -> GroupId {
        backend
            .create_group(CreateGroupRequest {
                event_id: event(),
                buyer1_id: BuyerId::new("demo-user-1").unwrap(),
                mode: QueueMode::Solo,
            })
            .await
            .unwrap()
            .group_id
    }

    #[tokio::test]
    async fn empty_selection_makes_no_request() {
        let backend = InMemoryTicketingBackend::new();
        let store = InMemoryCartStore::new();
        let handler = LockSeatsHandler::new(Arc::new(backend.clone()), Arc::new(store.clone()));

        let outcome = handler
            .handle(LockSeatsCommand {
                event_id: event(),
                group_id: GroupId::new("demo-group").unwrap(),
                seats: vec![],
            })
            .await
            .unwrap();

        assert_eq!(outcome, LockSeatsOutcome::NothingSelected);
        assert!(backend.calls().is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn granted_hold_writes_cart_and_opens_checkout() {
        let backend = InMemoryTicketingBackend::new();
        let group_id = join(&backend).await;
        let store = InMemoryCartStore::new();
        let handler = LockSeatsHandler::new(Arc::new(backend.clone()), Arc::new(store.clone()));

        let outcome = handler
            .handle(LockSeatsCommand {
                event_id: event(),
                group_id: group_id.clone(),
                seats: seats(&["101-A-3", "201-C-1"]),
            })
            .await
            .unwrap();

        let LockSeatsOutcome::Locked { cart, navigation } = outcome else {
            panic!("expected Locked");
        };
        assert_eq!(navigation, Navigation::Checkout { event_id: event() });
        assert_eq!(cart.group_id, group_id);
        assert_eq!(cart.total_price, Money::from_dollars(370));
        assert_eq!(cart.selected_seats[0].id.as_str(), "101-A-3");
        assert_eq!(Some(cart.expires_at), backend.active_hold(&group_id).map(|h| h.expires_at));

        assert_eq!(store.load().await.unwrap(), Some(cart));
    }

    #[tokio::test]
    async fn conflict_reports_detail_and_keeps_store_empty() {
        let backend = InMemoryTicketingBackend::new();
        let group_id = join(&backend).await;
        let store = InMemoryCartStore::new();
        let handler = LockSeatsHandler::new(Arc::new(backend), Arc::new(store.clone()));

        let err = handler
            .handle(LockSeatsCommand {
                event_id: event(),
                group_id,
                seats: seats(&["101-A-2"]),
            })
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Seat lock failed: Seat 101-A-2 is no longer available");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn transport_failure_has_fixed_message() {
        let backend = InMemoryTicketingBackend::new();
        backend.fail_next(Endpoint::LockSeats, BackendError::network("reset"));
        let handler = LockSeatsHandler::new(Arc::new(backend), Arc::new(InMemoryCartStore::new()));

        let err = handler
            .handle(LockSeatsCommand {
                event_id: event(),
                group_id: GroupId::new("demo-group").unwrap(),
                seats: seats(&["101-A-1"]),
            })
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Error locking seats.");
    }
}
