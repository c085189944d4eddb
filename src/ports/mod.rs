//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TicketingBackend` - The remote queue, seat map, and checkout service
//! - `CartStore` - Persistence of the checkout cart between views

mod cart_store;
mod ticketing_backend;

pub use cart_store::{CartStore, CartStoreError};
pub use ticketing_backend::{
    BackendError, CompleteCheckoutRequest, CreateGroupRequest, CreateGroupResponse,
    LeaveQueueRequest, LockSeatsRequest, LockSeatsResponse, TicketingBackend,
};
