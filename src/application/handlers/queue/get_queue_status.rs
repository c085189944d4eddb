//! GetQueueStatusHandler - Query handler for a group's place in line.

use std::sync::Arc;

use crate::application::Navigation;
use crate::domain::foundation::{EventId, GroupId};
use crate::domain::queue::Group;
use crate::ports::TicketingBackend;

/// Query for a group's queue status.
#[derive(Debug, Clone)]
pub struct GetQueueStatusQuery {
    pub event_id: EventId,
    pub group_id: GroupId,
}

/// Snapshot of a group in the queue.
///
/// `group` and `position` are fetched independently; either is `None` when
/// its request failed or the backend had nothing to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStatus {
    pub event_id: EventId,
    pub group_id: GroupId,
    pub group: Option<Group>,
    pub position: Option<u32>,
}

impl QueueStatus {
    /// Position for display, `—` when unknown.
    pub fn position_label(&self) -> String {
        self.position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "—".to_string())
    }

    /// Moving on from the queue to the seat map.
    pub fn continue_to_seats(&self) -> Navigation {
        Navigation::SeatMap {
            event_id: self.event_id.clone(),
            group_id: self.group_id.clone(),
        }
    }
}

/// Handler for fetching queue status. Never fails.
pub struct GetQueueStatusHandler {
    backend: Arc<dyn TicketingBackend>,
}

impl GetQueueStatusHandler {
    pub fn new(backend: Arc<dyn TicketingBackend>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, query: &GetQueueStatusQuery) -> QueueStatus {
        let (group, position) = futures::join!(
            self.backend.get_group(&query.group_id),
            self.backend.get_position(&query.event_id, &query.group_id),
        );

        let group = group
            .map_err(|e| tracing::warn!(group_id = %query.group_id, error = %e, "Group lookup failed"))
            .ok();
        let position = position
            .map_err(|e| tracing::warn!(group_id = %query.group_id, error = %e, "Position lookup failed"))
            .ok()
            .flatten();

        QueueStatus {
            event_id: query.event_id.clone(),
            group_id: query.group_id.clone(),
            group,
            position,
        }
    }
}
