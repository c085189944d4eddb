//! Seating handlers.
//!
//! Both loaders fall back to the built-in demo catalog when the backend
//! cannot answer, so the seat map always has something to show.

mod load_seats;
mod load_sections;

pub use load_seats::{LoadSeatsHandler, LoadSeatsQuery, LoadSeatsResult};
pub use load_sections::{LoadSectionsHandler, LoadSectionsQuery, LoadSectionsResult};

/// Where loaded seating data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Backend,
    /// The demo catalog, used after a failed request.
    Fallback,
}
