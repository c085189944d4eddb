//! Queue handlers.
//!
//! ## Commands
//! - Joining an event's queue
//! - Leaving the queue
//!
//! ## Queries
//! - Queue status (one-shot and polled)

mod get_queue_status;
mod join_queue;
mod leave_queue;
mod queue_status_poller;

// Commands
pub use join_queue::{JoinQueueCommand, JoinQueueHandler, JoinQueueResult};
pub use leave_queue::{LeaveQueueCommand, LeaveQueueHandler, LeaveQueueResult};

// Queries
pub use get_queue_status::{GetQueueStatusHandler, GetQueueStatusQuery, QueueStatus};
pub use queue_status_poller::QueueStatusPoller;
