//! In-memory ticketing backend.
//!
//! Emulates the remote service in process so the storefront flow can run
//! offline and be tested without a server. Supports:
//! - FIFO queue positions per event
//! - Exclusive, expiring seat holds (one active hold per seat)
//! - Purchases that take seats off the map
//! - Error injection and call tracking
//!
//! Holds are expired lazily whenever state is read or written.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::checkout::Hold;
use crate::domain::foundation::{EventId, GroupId, SeatId, SectionId, Timestamp};
use crate::domain::queue::Group;
use crate::domain::seating::{mock_seats, sections_from_seats, Seat, Section, MAX_SELECTION};
use crate::ports::{
    BackendError, CompleteCheckoutRequest, CreateGroupRequest, CreateGroupResponse,
    LeaveQueueRequest, LockSeatsRequest, LockSeatsResponse, TicketingBackend,
};

/// Default lifetime of a seat hold.
pub const DEFAULT_HOLD_TTL_SECS: i64 = 300;

/// Backend operations, for error injection and call assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CreateGroup,
    GetGroup,
    GetPosition,
    LeaveQueue,
    ListSections,
    ListSeats,
    LockSeats,
    CompleteCheckout,
}

/// In-memory implementation of the ticketing backend.
///
/// # Example
///
/// ```ignore
/// let backend = InMemoryTicketingBackend::new();
/// backend.fail_next(Endpoint::ListSections, BackendError::network("down"));
/// ```
#[derive(Clone)]
pub struct InMemoryTicketingBackend {
    inner: Arc<Mutex<BackendState>>,
    hold_ttl: Duration,
}

struct BackendState {
    /// Catalog per event; events not listed use `default_catalog`.
    catalogs: HashMap<EventId, Vec<Seat>>,
    default_catalog: Option<Vec<Seat>>,
    groups: HashMap<GroupId, Group>,
    queues: HashMap<EventId, Vec<GroupId>>,
    holds: HashMap<GroupId, Hold>,
    sold: HashSet<(EventId, SeatId)>,
    next_errors: HashMap<Endpoint, BackendError>,
    offline: bool,
    call_log: Vec<Endpoint>,
}

impl Default for InMemoryTicketingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTicketingBackend {
    /// Every event gets the built-in demo catalog.
    pub fn new() -> Self {
        Self::with_default_catalog(Some(mock_seats().to_vec()))
    }

    /// No events at all until added with [`with_event`](Self::with_event).
    pub fn empty() -> Self {
        Self::with_default_catalog(None)
    }

    fn with_default_catalog(default_catalog: Option<Vec<Seat>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BackendState {
                catalogs: HashMap::new(),
                default_catalog,
                groups: HashMap::new(),
                queues: HashMap::new(),
                holds: HashMap::new(),
                sold: HashSet::new(),
                next_errors: HashMap::new(),
                offline: false,
                call_log: Vec::new(),
            })),
            hold_ttl: Duration::seconds(DEFAULT_HOLD_TTL_SECS),
        }
    }

    /// Registers an event with its own seats.
    pub fn with_event(self, event_id: EventId, seats: Vec<Seat>) -> Self {
        self.state().catalogs.insert(event_id, seats);
        self
    }

    /// Sets how long holds last. Zero or negative makes holds lapse at once.
    pub fn with_hold_ttl(mut self, ttl: Duration) -> Self {
        self.hold_ttl = ttl;
        self
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test controls
    // ════════════════════════════════════════════════════════════════════════════

    /// Fails the next call to `endpoint` with `error`.
    pub fn fail_next(&self, endpoint: Endpoint, error: BackendError) {
        self.state().next_errors.insert(endpoint, error);
    }

    /// While offline every call fails with a network error.
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    /// Endpoints called so far, in order.
    pub fn calls(&self) -> Vec<Endpoint> {
        self.state().call_log.clone()
    }

    /// Number of calls made to one endpoint.
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.state().call_log.iter().filter(|e| **e == endpoint).count()
    }

    /// The group's hold, if still active.
    pub fn active_hold(&self, group_id: &GroupId) -> Option<Hold> {
        let mut state = self.state();
        state.purge_expired(Timestamp::now());
        state.holds.get(group_id).cloned()
    }

    /// Whether a seat has been purchased.
    pub fn is_sold(&self, event_id: &EventId, seat_id: &SeatId) -> bool {
        self.state()
            .sold
            .contains(&(event_id.clone(), seat_id.clone()))
    }

    fn state(&self) -> MutexGuard<'_, BackendState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Records the call and applies offline mode / injected errors.
    fn enter(&self, endpoint: Endpoint) -> Result<MutexGuard<'_, BackendState>, BackendError> {
        let mut state = self.state();
        state.call_log.push(endpoint);
        if state.offline {
            return Err(BackendError::network("Connection failed: backend offline"));
        }
        if let Some(err) = state.next_errors.remove(&endpoint) {
            return Err(err);
        }
        state.purge_expired(Timestamp::now());
        Ok(state)
    }
}

impl BackendState {
    fn catalog(&self, event_id: &EventId) -> Option<&Vec<Seat>> {
        self.catalogs
            .get(event_id)
            .or(self.default_catalog.as_ref())
    }

    fn group(&self, group_id: &GroupId) -> Result<&Group, BackendError> {
        self.groups
            .get(group_id)
            .ok_or_else(|| BackendError::rejected(404, "Group not found"))
    }

    fn position(&self, event_id: &EventId, group_id: &GroupId) -> Option<u32> {
        self.queues
            .get(event_id)?
            .iter()
            .position(|g| g == group_id)
            .map(|idx| idx as u32 + 1)
    }

    /// Drops lapsed holds, unlocking their groups.
    fn purge_expired(&mut self, now: Timestamp) {
        let expired: Vec<GroupId> = self
            .holds
            .iter()
            .filter(|(_, hold)| !hold.is_active_at(now))
            .map(|(group_id, _)| group_id.clone())
            .collect();

        for group_id in expired {
            self.holds.remove(&group_id);
            if let Some(group) = self.groups.get_mut(&group_id) {
                group.locked = false;
                group.in_checkout = false;
            }
            tracing::debug!(group_id = %group_id, "Seat hold expired");
        }
    }

    /// Group (other than `except`) holding a seat of this event.
    fn holder_of(
        &self,
        event_id: &EventId,
        seat_id: &SeatId,
        except: Option<&GroupId>,
    ) -> Option<&GroupId> {
        self.holds
            .iter()
            .filter(|(group_id, _)| Some(*group_id) != except)
            .filter(|(group_id, _)| {
                self.groups
                    .get(*group_id)
                    .map(|g| &g.event_id == event_id)
                    .unwrap_or(false)
            })
            .find(|(_, hold)| hold.covers(seat_id))
            .map(|(group_id, _)| group_id)
    }

    /// Seats of an event as currently visible: held and sold seats are unavailable.
    fn seats_view(&self, event_id: &EventId) -> Option<Vec<Seat>> {
        let seats = self.catalog(event_id)?;
        Some(
            seats
                .iter()
                .map(|seat| {
                    let mut seat = seat.clone();
                    seat.available = seat.available
                        && !self.sold.contains(&(event_id.clone(), seat.id.clone()))
                        && self.holder_of(event_id, &seat.id, None).is_none();
                    seat
                })
                .collect(),
        )
    }

    fn release_hold(&mut self, group_id: &GroupId) {
        if self.holds.remove(group_id).is_some() {
            tracing::debug!(group_id = %group_id, "Seat hold released");
        }
    }

    fn dequeue(&mut self, event_id: &EventId, group_id: &GroupId) {
        if let Some(queue) = self.queues.get_mut(event_id) {
            queue.retain(|g| g != group_id);
        }
    }
}

#[async_trait]
impl TicketingBackend for InMemoryTicketingBackend {
    async fn create_group(
        &self,
        request: CreateGroupRequest,
    ) -> Result<CreateGroupResponse, BackendError> {
        let mut state = self.enter(Endpoint::CreateGroup)?;
        if state.catalog(&request.event_id).is_none() {
            return Err(BackendError::rejected(404, "Event not found"));
        }

        let group_id = GroupId::new(uuid::Uuid::new_v4().to_string())
            .map_err(|e| BackendError::parse(e.to_string()))?;
        let group = Group::new(group_id.clone(), request.event_id.clone(), request.buyer1_id);

        state.groups.insert(group_id.clone(), group);
        state
            .queues
            .entry(request.event_id.clone())
            .or_default()
            .push(group_id.clone());

        tracing::debug!(event_id = %request.event_id, group_id = %group_id, mode = %request.mode, "Group created");
        Ok(CreateGroupResponse { group_id })
    }

    async fn get_group(&self, group_id: &GroupId) -> Result<Group, BackendError> {
        let state = self.enter(Endpoint::GetGroup)?;
        let mut group = state.group(group_id)?.clone();
        group.queue_position = state.position(&group.event_id, group_id);
        Ok(group)
    }

    async fn get_position(
        &self,
        event_id: &EventId,
        group_id: &GroupId,
    ) -> Result<Option<u32>, BackendError> {
        let state = self.enter(Endpoint::GetPosition)?;
        state.group(group_id)?;
        Ok(state.position(event_id, group_id))
    }

    async fn leave_queue(&self, request: LeaveQueueRequest) -> Result<(), BackendError> {
        let mut state = self.enter(Endpoint::LeaveQueue)?;
        state.group(&request.group_id)?;

        state.dequeue(&request.event_id, &request.group_id);
        state.release_hold(&request.group_id);
        state.groups.remove(&request.group_id);
        Ok(())
    }

    async fn list_sections(&self, event_id: &EventId) -> Result<Vec<Section>, BackendError> {
        let state = self.enter(Endpoint::ListSections)?;
        let seats = state
            .seats_view(event_id)
            .ok_or_else(|| BackendError::rejected(404, "Event not found"))?;
        Ok(sections_from_seats(&seats))
    }

    async fn list_seats(
        &self,
        event_id: &EventId,
        section_id: &SectionId,
    ) -> Result<Vec<Seat>, BackendError> {
        let state = self.enter(Endpoint::ListSeats)?;
        let seats: Vec<Seat> = state
            .seats_view(event_id)
            .ok_or_else(|| BackendError::rejected(404, "Event not found"))?
            .into_iter()
            .filter(|s| &s.section_id == section_id)
            .collect();

        if seats.is_empty() {
            return Err(BackendError::rejected(404, "Section not found"));
        }
        Ok(seats)
    }

    async fn lock_seats(
        &self,
        request: LockSeatsRequest,
    ) -> Result<LockSeatsResponse, BackendError> {
        let mut state = self.enter(Endpoint::LockSeats)?;
        let event_id = state.group(&request.group_id)?.event_id.clone();

        if request.ticket_ids.is_empty() {
            return Err(BackendError::rejected(400, "No seats selected"));
        }
        if request.ticket_ids.len() > MAX_SELECTION {
            return Err(BackendError::rejected(
                400,
                format!("At most {} seats can be locked", MAX_SELECTION),
            ));
        }

        // Check every seat before touching state so a rejection changes nothing
        let catalog = state
            .catalog(&event_id)
            .ok_or_else(|| BackendError::rejected(404, "Event not found"))?;
        for seat_id in &request.ticket_ids {
            let seat = catalog
                .iter()
                .find(|s| &s.id == seat_id)
                .ok_or_else(|| BackendError::rejected(404, format!("Seat {} not found", seat_id)))?;

            let taken = !seat.available
                || state.sold.contains(&(event_id.clone(), seat_id.clone()))
                || state.holder_of(&event_id, seat_id, Some(&request.group_id)).is_some();
            if taken {
                return Err(BackendError::rejected(
                    409,
                    format!("Seat {} is no longer available", seat_id),
                ));
            }
        }

        let expires_at = Timestamp::now().plus(self.hold_ttl);
        let hold = Hold::new(request.group_id.clone(), request.ticket_ids, expires_at);
        state.holds.insert(request.group_id.clone(), hold);
        if let Some(group) = state.groups.get_mut(&request.group_id) {
            group.locked = true;
            group.in_checkout = true;
        }

        tracing::debug!(group_id = %request.group_id, expires_at = %expires_at.as_datetime(), "Seats held");
        Ok(LockSeatsResponse { expires_at })
    }

    async fn complete_checkout(
        &self,
        request: CompleteCheckoutRequest,
    ) -> Result<(), BackendError> {
        let mut state = self.enter(Endpoint::CompleteCheckout)?;
        let event_id = state.group(&request.group_id)?.event_id.clone();

        let hold = state
            .holds
            .remove(&request.group_id)
            .ok_or_else(|| BackendError::rejected(409, "No active seat lock for this group"))?;

        for seat_id in hold.seat_ids {
            state.sold.insert((event_id.clone(), seat_id));
        }
        state.dequeue(&event_id, &request.group_id);
        state.groups.remove(&request.group_id);

        tracing::debug!(group_id = %request.group_id, buyer_id = %request.buyer_id, "Purchase recorded");
        Ok(())
    }
}
