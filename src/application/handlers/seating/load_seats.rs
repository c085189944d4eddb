//! LoadSeatsHandler - Query handler for the seats of one section.

use std::sync::Arc;

use crate::domain::foundation::{EventId, SectionId};
use crate::domain::seating::{mock_seats_in, Seat};
use crate::ports::TicketingBackend;

use super::DataSource;

#[derive(Debug, Clone)]
pub struct LoadSeatsQuery {
    pub event_id: EventId,
    pub section_id: SectionId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSeatsResult {
    pub seats: Vec<Seat>,
    pub source: DataSource,
}

/// Handler for loading a section's seats. On failure the demo seats of the
/// same section are returned.
pub struct LoadSeatsHandler {
    backend: Arc<dyn TicketingBackend>,
}

impl LoadSeatsHandler {
    pub fn new(backend: Arc<dyn TicketingBackend>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, query: &LoadSeatsQuery) -> LoadSeatsResult {
        match self
            .backend
            .list_seats(&query.event_id, &query.section_id)
            .await
        {
            Ok(seats) => LoadSeatsResult {
                seats,
                source: DataSource::Backend,
            },
            Err(e) => {
                tracing::warn!(
                    event_id = %query.event_id,
                    section_id = %query.section_id,
                    error = %e,
                    "Seat load failed, using mock seats"
                );
                LoadSeatsResult {
                    seats: mock_seats_in(&query.section_id),
                    source: DataSource::Fallback,
                }
            }
        }
    }
}
