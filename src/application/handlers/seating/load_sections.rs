//! LoadSectionsHandler - Query handler for an event's sections.

use std::sync::Arc;

use crate::domain::foundation::EventId;
use crate::domain::seating::{mock_sections, Section};
use crate::ports::TicketingBackend;

use super::DataSource;

/// Query for the sections of an event.
#[derive(Debug, Clone)]
pub struct LoadSectionsQuery {
    pub event_id: EventId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSectionsResult {
    pub sections: Vec<Section>,
    pub source: DataSource,
}

/// Handler for loading sections. Never fails: any backend error yields
/// the demo sections.
pub struct LoadSectionsHandler {
    backend: Arc<dyn TicketingBackend>,
}

impl LoadSectionsHandler {
    pub fn new(backend: Arc<dyn TicketingBackend>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, query: &LoadSectionsQuery) -> LoadSectionsResult {
        match self.backend.list_sections(&query.event_id).await {
            Ok(sections) => LoadSectionsResult {
                sections,
                source: DataSource::Backend,
            },
            Err(e) => {
                tracing::warn!(
                    event_id = %query.event_id,
                    error = %e,
                    "Backend section load failed, using mock seats"
                );
                LoadSectionsResult {
                    sections: mock_sections(),
                    source: DataSource::Fallback,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backend::{Endpoint, InMemoryTicketingBackend};
    use crate::domain::foundation::{Money, SeatId, SectionId};
    use crate::domain::seating::{Level, Seat};
    use crate::ports::BackendError;

    fn query() -> LoadSectionsQuery {
        LoadSectionsQuery {
            event_id: EventId::new("demo-event").unwrap(),
        }
    }

    #[tokio::test]
    async fn uses_backend_sections() {
        let seats = vec![Seat::new(
            SeatId::new("301-A-1").unwrap(),
            SectionId::new("301").unwrap(),
            "A",
            1,
            Money::from_dollars(99),
        )];
        let backend = InMemoryTicketingBackend::empty()
            .with_event(EventId::new("demo-event").unwrap(), seats);

        let result = LoadSectionsHandler::new(Arc::new(backend)).handle(&query()).await;

        assert_eq!(result.source, DataSource::Backend);
        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].id.as_str(), "301");
    }

    #[tokio::test]
    async fn falls_back_to_demo_sections_on_error() {
        let backend = InMemoryTicketingBackend::new();
        backend.fail_next(Endpoint::ListSections, BackendError::http(503, "unavailable"));

        let result = LoadSectionsHandler::new(Arc::new(backend)).handle(&query()).await;

        assert_eq!(result.source, DataSource::Fallback);
        let ids: Vec<_> = result.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["101", "201"]);

        let lower = &result.sections[0];
        assert_eq!(lower.level, Level::Lower);
        assert_eq!(lower.base_price, Money::from_dollars(220));
        assert_eq!(lower.total_seats, 4);
        assert_eq!(lower.available_seats, 3);

        let upper = &result.sections[1];
        assert_eq!(upper.level, Level::Upper);
        assert_eq!(upper.total_seats, 2);
    }

    #[tokio::test]
    async fn falls_back_when_offline() {
        let backend = InMemoryTicketingBackend::new();
        backend.set_offline(true);

        let result = LoadSectionsHandler::new(Arc::new(backend)).handle(&query()).await;

        assert_eq!(result.source, DataSource::Fallback);
        assert_eq!(result.sections, mock_sections());
    }
}
