//! Ticketing backend adapters.
//!
//! - `HttpTicketingBackend` - the real service over HTTP
//! - `InMemoryTicketingBackend` - in-process emulation for offline use and tests

mod http_backend;
mod in_memory_backend;
mod wire;

pub use http_backend::{HttpBackendConfig, HttpTicketingBackend};
pub use in_memory_backend::{Endpoint, InMemoryTicketingBackend, DEFAULT_HOLD_TTL_SECS};
