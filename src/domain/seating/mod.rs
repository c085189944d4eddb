//! Seating domain - sections, seats, selection, and the demo catalog.

mod mock_catalog;
mod seat;
mod seat_map;
mod section;
mod selection;

pub use mock_catalog::{mock_seats, mock_seats_in, mock_sections, sections_from_seats};
pub use seat::Seat;
pub use seat_map::SeatMap;
pub use section::{Level, Section};
pub use selection::{IgnoreReason, SeatSelection, ToggleOutcome, MAX_SELECTION};
