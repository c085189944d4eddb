//! Navigation - where a completed action sends the user.

use std::fmt;

use crate::domain::foundation::{EventId, GroupId};

/// Views of the storefront flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Home,
    Event { event_id: EventId },
    QueueStatus { event_id: EventId, group_id: GroupId },
    SeatMap { event_id: EventId, group_id: GroupId },
    Checkout { event_id: EventId },
    CheckoutSuccess,
    Wallet,
}

impl Navigation {
    /// Storefront path of the view.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Event { event_id } => format!("/events/{}", event_id),
            Self::QueueStatus { event_id, group_id } => {
                format!("/events/{}/queue/status/{}", event_id, group_id)
            }
            Self::SeatMap { event_id, group_id } => {
                format!("/events/{}/map?groupId={}", event_id, group_id)
            }
            Self::Checkout { event_id } => format!("/checkout/{}", event_id),
            Self::CheckoutSuccess => "/checkout/success".to_string(),
            Self::Wallet => "/wallet".to_string(),
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
