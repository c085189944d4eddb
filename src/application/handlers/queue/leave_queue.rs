//! LeaveQueueHandler - Command handler for stepping out of the queue.

use std::sync::Arc;

use crate::application::Navigation;
use crate::domain::foundation::{EventId, GroupId};
use crate::ports::{LeaveQueueRequest, TicketingBackend};

/// Command to leave the queue.
#[derive(Debug, Clone)]
pub struct LeaveQueueCommand {
    pub event_id: EventId,
    pub group_id: GroupId,
}

/// Result of leaving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveQueueResult {
    /// Always the event page.
    pub navigation: Navigation,
    /// Whether the backend confirmed the departure.
    pub acknowledged: bool,
}

/// Handler for leaving the queue.
///
/// The user is returned to the event page whatever the backend says;
/// failures are only logged.
pub struct LeaveQueueHandler {
    backend: Arc<dyn TicketingBackend>,
}

impl LeaveQueueHandler {
    pub fn new(backend: Arc<dyn TicketingBackend>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, cmd: LeaveQueueCommand) -> LeaveQueueResult {
        let request = LeaveQueueRequest {
            event_id: cmd.event_id.clone(),
            group_id: cmd.group_id.clone(),
        };

        let acknowledged = match self.backend.leave_queue(request).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(group_id = %cmd.group_id, error = %e, "Failed to leave queue");
                false
            }
        };

        LeaveQueueResult {
            navigation: Navigation::Event {
                event_id: cmd.event_id,
            },
            acknowledged,
        }
    }
}
