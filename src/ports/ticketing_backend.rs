//! Ticketing backend port - the remote queue, seat map, and checkout API.
//!
//! Admission ordering, seat exclusivity, and inventory all live behind this
//! contract. Implementations speak to the real service over HTTP or emulate
//! it in memory.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | `create_group` | `POST /queue/create-group` |
//! | `get_group` | `GET /queue/group/{groupId}` |
//! | `get_position` | `GET /queue/position/{eventId}/{groupId}` |
//! | `leave_queue` | `POST /queue/leave` |
//! | `list_sections` | `GET /map/events/{eventId}/sections` |
//! | `list_seats` | `GET /map/events/{eventId}/sections/{sectionId}/seats` |
//! | `lock_seats` | `POST /checkout/lock` |
//! | `complete_checkout` | `POST /checkout/complete` |

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BuyerId, EventId, GroupId, SeatId, SectionId, Timestamp};
use crate::domain::queue::{Group, QueueMode};
use crate::domain::seating::{Seat, Section};

/// Port for the remote ticketing service.
#[async_trait]
pub trait TicketingBackend: Send + Sync {
    /// Admit a party to the event queue, creating its group.
    async fn create_group(
        &self,
        request: CreateGroupRequest,
    ) -> Result<CreateGroupResponse, BackendError>;

    /// Fetch a group by id.
    async fn get_group(&self, group_id: &GroupId) -> Result<Group, BackendError>;

    /// Current queue position of a group; `None` once it is no longer queued.
    async fn get_position(
        &self,
        event_id: &EventId,
        group_id: &GroupId,
    ) -> Result<Option<u32>, BackendError>;

    /// Remove a group from the queue.
    async fn leave_queue(&self, request: LeaveQueueRequest) -> Result<(), BackendError>;

    /// Sections of an event's seat map.
    async fn list_sections(&self, event_id: &EventId) -> Result<Vec<Section>, BackendError>;

    /// Seats of one section.
    async fn list_seats(
        &self,
        event_id: &EventId,
        section_id: &SectionId,
    ) -> Result<Vec<Seat>, BackendError>;

    /// Request an exclusive, expiring hold on seats for a group.
    async fn lock_seats(&self, request: LockSeatsRequest)
        -> Result<LockSeatsResponse, BackendError>;

    /// Turn the group's active hold into a purchase.
    async fn complete_checkout(&self, request: CompleteCheckoutRequest)
        -> Result<(), BackendError>;
}

/// Body of `POST /queue/create-group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub event_id: EventId,
    pub buyer1_id: BuyerId,
    pub mode: QueueMode,
}

/// Response of `POST /queue/create-group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupResponse {
    pub group_id: GroupId,
}

/// Body of `POST /queue/leave`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveQueueRequest {
    pub event_id: EventId,
    pub group_id: GroupId,
}

/// Body of `POST /checkout/lock`. Seat ids double as ticket ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSeatsRequest {
    pub group_id: GroupId,
    pub ticket_ids: Vec<SeatId>,
}

/// Response of `POST /checkout/lock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockSeatsResponse {
    pub expires_at: Timestamp,
}

/// Body of `POST /checkout/complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteCheckoutRequest {
    pub group_id: GroupId,
    pub buyer_id: BuyerId,
}

/// Errors from the ticketing backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// The `detail` field of the error body, if any.
        detail: Option<String>,
        /// Raw response body.
        body: String,
    },

    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl BackendError {
    /// Creates an HTTP error, pulling `detail` out of a JSON body.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let detail = extract_detail(&body);
        Self::Http {
            status,
            detail,
            body,
        }
    }

    /// Creates an HTTP error with a JSON `{"detail": ...}` body.
    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Http {
            status,
            body: serde_json::json!({ "detail": detail }).to_string(),
            detail: Some(detail),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Server-provided detail message, if the backend sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pulls a `detail` message out of an error body.
///
/// String details are returned as-is; structured details (validation error
/// lists) are returned as compact JSON.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
