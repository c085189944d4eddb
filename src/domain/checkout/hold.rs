//! Hold - a time-limited exclusive claim on a set of seats.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GroupId, SeatId, Timestamp};

use super::Countdown;

/// Seats claimed by a group until `expires_at`.
///
/// A seat is referenced by at most one active hold at a time. The backend
/// enforces this; the client only tracks the expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hold {
    pub group_id: GroupId,
    pub seat_ids: Vec<SeatId>,
    pub expires_at: Timestamp,
}

impl Hold {
    pub fn new(group_id: GroupId, seat_ids: Vec<SeatId>, expires_at: Timestamp) -> Self {
        Self {
            group_id,
            seat_ids,
            expires_at,
        }
    }

    /// A hold is active strictly before its expiry.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        now.is_before(&self.expires_at)
    }

    pub fn covers(&self, seat: &SeatId) -> bool {
        self.seat_ids.contains(seat)
    }

    pub fn countdown_at(&self, now: Timestamp) -> Countdown {
        Countdown::between(now, self.expires_at)
    }
}
