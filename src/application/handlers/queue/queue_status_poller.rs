//! QueueStatusPoller - keeps the queue status view fresh.

use std::sync::Arc;
use std::time::Duration;

use crate::application::polling::{spawn_interval, Subscription, TickOutcome};
use crate::ports::TicketingBackend;

use super::{GetQueueStatusHandler, GetQueueStatusQuery, QueueStatus};

/// Refreshes a group's status immediately, then every `period`, until the
/// returned subscription is cancelled or dropped.
pub struct QueueStatusPoller {
    handler: Arc<GetQueueStatusHandler>,
    period: Duration,
}

impl QueueStatusPoller {
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

    pub fn new(backend: Arc<dyn TicketingBackend>, period: Duration) -> Self {
        Self {
            handler: Arc::new(GetQueueStatusHandler::new(backend)),
            period,
        }
    }

    pub fn start(&self, query: GetQueueStatusQuery) -> Subscription<QueueStatus> {
        tracing::debug!(group_id = %query.group_id, period_secs = self.period.as_secs(), "Polling queue status");
        let handler = self.handler.clone();

        spawn_interval(self.period, move || {
            let handler = handler.clone();
            let query = query.clone();
            async move { TickOutcome::Continue(handler.handle(&query).await) }
        })
    }
}
