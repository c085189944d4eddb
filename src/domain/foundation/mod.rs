//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the storefront domain.

mod errors;
mod ids;
mod money;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{BuyerId, EventId, GroupId, SeatId, SectionId};
pub use money::Money;
pub use timestamp::Timestamp;
