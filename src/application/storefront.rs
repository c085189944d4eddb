//! Storefront - the whole flow behind one handle.
//!
//! Wires the backend and cart store into every handler so front ends (the
//! CLI, tests) drive the flow without assembling handlers themselves.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::checkout::Countdown;
use crate::domain::foundation::{BuyerId, EventId, GroupId, SectionId, Timestamp};
use crate::domain::queue::QueueMode;
use crate::domain::seating::SeatMap;
use crate::ports::{CartStore, TicketingBackend};

use super::handlers::checkout::{
    CheckoutView, CompleteCheckoutHandler, CompleteCheckoutOutcome, CountdownTicker,
    LockSeatsCommand, LockSeatsHandler, LockSeatsOutcome, ViewCheckoutHandler,
};
use super::handlers::queue::{
    GetQueueStatusHandler, GetQueueStatusQuery, JoinQueueCommand, JoinQueueHandler,
    JoinQueueResult, LeaveQueueCommand, LeaveQueueHandler, LeaveQueueResult, QueueStatus,
    QueueStatusPoller,
};
use super::handlers::seating::{
    DataSource, LoadSeatsHandler, LoadSeatsQuery, LoadSectionsHandler, LoadSectionsQuery,
};
use super::polling::Subscription;
use super::StorefrontError;

/// Shown on the home view.
pub const HOME_MESSAGE: &str = "Demo frontend — start at /events/demo-event";
/// Headline of the success view.
pub const SUCCESS_HEADLINE: &str = "Congrats — You Joined the Crowd!";
/// Body of the success view.
pub const SUCCESS_MESSAGE: &str = "Your seats are locked in and your digital tickets are being generated. \
Check your wallet page to view them, or share the excitement with your friends.";
/// Body of the wallet view.
pub const WALLET_MESSAGE: &str = "This is a placeholder wallet page. In the full app, this would list your \
digital tickets and NFC passes.";

/// Identities and timer periods used by the flow.
#[derive(Debug, Clone)]
pub struct StorefrontSettings {
    /// First buyer of a newly created group.
    pub buyer_id: BuyerId,
    /// Buyer named on checkout completion.
    pub checkout_buyer_id: BuyerId,
    pub queue_poll_period: Duration,
    pub countdown_period: Duration,
}

/// The storefront flow.
pub struct Storefront {
    join_queue: JoinQueueHandler,
    queue_status: GetQueueStatusHandler,
    queue_poller: QueueStatusPoller,
    leave_queue: LeaveQueueHandler,
    load_sections: LoadSectionsHandler,
    load_seats: LoadSeatsHandler,
    lock_seats: LockSeatsHandler,
    view_checkout: ViewCheckoutHandler,
    complete_checkout: CompleteCheckoutHandler,
    countdown: CountdownTicker,
}

impl Storefront {
    pub fn new(
        backend: Arc<dyn TicketingBackend>,
        cart_store: Arc<dyn CartStore>,
        settings: StorefrontSettings,
    ) -> Self {
        Self {
            join_queue: JoinQueueHandler::new(backend.clone(), settings.buyer_id),
            queue_status: GetQueueStatusHandler::new(backend.clone()),
            queue_poller: QueueStatusPoller::new(backend.clone(), settings.queue_poll_period),
            leave_queue: LeaveQueueHandler::new(backend.clone()),
            load_sections: LoadSectionsHandler::new(backend.clone()),
            load_seats: LoadSeatsHandler::new(backend.clone()),
            lock_seats: LockSeatsHandler::new(backend.clone(), cart_store.clone()),
            view_checkout: ViewCheckoutHandler::new(cart_store.clone()),
            complete_checkout: CompleteCheckoutHandler::new(
                backend,
                cart_store,
                settings.checkout_buyer_id,
            ),
            countdown: CountdownTicker::new(settings.countdown_period),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Queue
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn join_queue(
        &self,
        event_id: EventId,
        mode: QueueMode,
    ) -> Result<JoinQueueResult, StorefrontError> {
        self.join_queue
            .handle(JoinQueueCommand { event_id, mode })
            .await
    }

    pub async fn queue_status(&self, event_id: EventId, group_id: GroupId) -> QueueStatus {
        self.queue_status
            .handle(&GetQueueStatusQuery { event_id, group_id })
            .await
    }

    pub fn watch_queue(&self, event_id: EventId, group_id: GroupId) -> Subscription<QueueStatus> {
        self.queue_poller
            .start(GetQueueStatusQuery { event_id, group_id })
    }

    pub async fn leave_queue(&self, event_id: EventId, group_id: GroupId) -> LeaveQueueResult {
        self.leave_queue
            .handle(LeaveQueueCommand { event_id, group_id })
            .await
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Seat map
    // ════════════════════════════════════════════════════════════════════════════

    /// Loads the sections and the seats of the first one.
    pub async fn open_seat_map(&self, event_id: &EventId) -> (SeatMap, DataSource) {
        let sections = self
            .load_sections
            .handle(&LoadSectionsQuery {
                event_id: event_id.clone(),
            })
            .await;

        let mut map = SeatMap::new();
        map.set_sections(sections.sections);
        if let Some(section_id) = map.selected_section_id().cloned() {
            self.load_section_seats(&mut map, event_id, section_id).await;
        }
        (map, sections.source)
    }

    /// Focuses another section and loads its seats. Clears the selection.
    ///
    /// Returns `false` if the section is not on the map.
    pub async fn select_section(
        &self,
        map: &mut SeatMap,
        event_id: &EventId,
        section_id: &SectionId,
    ) -> bool {
        if !map.select_section(section_id) {
            return false;
        }
        self.load_section_seats(map, event_id, section_id.clone())
            .await;
        true
    }

    async fn load_section_seats(&self, map: &mut SeatMap, event_id: &EventId, section_id: SectionId) {
        let seats = self
            .load_seats
            .handle(&LoadSeatsQuery {
                event_id: event_id.clone(),
                section_id,
            })
            .await;
        map.set_seats(seats.seats);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Checkout
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn lock_seats(
        &self,
        event_id: EventId,
        group_id: GroupId,
        map: &SeatMap,
    ) -> Result<LockSeatsOutcome, StorefrontError> {
        self.lock_seats
            .handle(LockSeatsCommand {
                event_id,
                group_id,
                seats: map.selected_seats(),
            })
            .await
    }

    pub async fn view_checkout(&self) -> Result<CheckoutView, StorefrontError> {
        self.view_checkout.handle().await
    }

    pub fn watch_countdown(&self, expires_at: Timestamp) -> Subscription<Countdown> {
        self.countdown.start(expires_at)
    }

    pub async fn complete_checkout(&self) -> Result<CompleteCheckoutOutcome, StorefrontError> {
        self.complete_checkout.handle().await
    }
}
