//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the storefront to external systems:
//! - `backend` - Ticketing backend (HTTP, in-memory)
//! - `storage` - Checkout cart persistence (file, in-memory)

pub mod backend;
pub mod storage;

pub use backend::{HttpBackendConfig, HttpTicketingBackend, InMemoryTicketingBackend};
pub use storage::{FileCartStore, InMemoryCartStore};
