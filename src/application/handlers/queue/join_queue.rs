//! JoinQueueHandler - Command handler for entering an event's queue.

use std::sync::Arc;

use crate::application::{Navigation, StorefrontError, UserAction};
use crate::domain::foundation::{BuyerId, EventId, GroupId};
use crate::domain::queue::QueueMode;
use crate::ports::{CreateGroupRequest, TicketingBackend};

/// Command to join an event's queue.
#[derive(Debug, Clone)]
pub struct JoinQueueCommand {
    pub event_id: EventId,
    pub mode: QueueMode,
}

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinQueueResult {
    pub group_id: GroupId,
    /// The queue status view for the new group.
    pub navigation: Navigation,
}

/// Handler for joining the queue.
///
/// The party is created with the configured buyer as its first member.
pub struct JoinQueueHandler {
    backend: Arc<dyn TicketingBackend>,
    buyer_id: BuyerId,
}

impl JoinQueueHandler {
    pub fn new(backend: Arc<dyn TicketingBackend>, buyer_id: BuyerId) -> Self {
        Self { backend, buyer_id }
    }

    pub async fn handle(&self, cmd: JoinQueueCommand) -> Result<JoinQueueResult, StorefrontError> {
        let request = CreateGroupRequest {
            event_id: cmd.event_id.clone(),
            buyer1_id: self.buyer_id.clone(),
            mode: cmd.mode,
        };

        let response = self.backend.create_group(request).await.map_err(|e| {
            tracing::error!(event_id = %cmd.event_id, mode = %cmd.mode, error = %e, "Failed to join queue");
            StorefrontError::backend(UserAction::JoinQueue, e)
        })?;

        Ok(JoinQueueResult {
            navigation: Navigation::QueueStatus {
                event_id: cmd.event_id,
                group_id: response.group_id.clone(),
            },
            group_id: response.group_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backend::{Endpoint, InMemoryTicketingBackend};
    use crate::ports::BackendError;

    fn command() -> JoinQueueCommand {
        JoinQueueCommand {
            event_id: EventId::new("demo-event").unwrap(),
            mode: QueueMode::Friend,
        }
    }

    fn handler(backend: &InMemoryTicketingBackend) -> JoinQueueHandler {
        JoinQueueHandler::new(
            Arc::new(backend.clone()),
            BuyerId::new("demo-user-1").unwrap(),
        )
    }

    #[tokio::test]
    async fn join_navigates_to_queue_status() {
        let backend = InMemoryTicketingBackend::new();

        let result = handler(&backend).handle(command()).await.unwrap();

        assert_eq!(
            result.navigation,
            Navigation::QueueStatus {
                event_id: EventId::new("demo-event").unwrap(),
                group_id: result.group_id.clone(),
            }
        );
        let group = backend.get_group(&result.group_id).await.unwrap();
        assert_eq!(group.buyer1_id.unwrap().as_str(), "demo-user-1");
    }

    #[tokio::test]
    async fn rejection_shows_server_detail() {
        let backend = InMemoryTicketingBackend::new();
        backend.fail_next(Endpoint::CreateGroup, BackendError::rejected(403, "Queue closed"));

        let err = handler(&backend).handle(command()).await.unwrap_err();

        assert_eq!(err.user_message(), "Queue closed");
    }

    #[tokio::test]
    async fn network_failure_has_fixed_message() {
        let backend = InMemoryTicketingBackend::new();
        backend.set_offline(true);

        let err = handler(&backend).handle(command()).await.unwrap_err();

        assert_eq!(err.user_message(), "Network error creating group");
    }
}
