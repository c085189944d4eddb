//! Seat selection - the set of seats a buyer intends to lock.

use std::fmt;

use crate::domain::foundation::{Money, SeatId};

use super::Seat;

/// Maximum number of seats one group may select at once.
pub const MAX_SELECTION: usize = 4;

/// Result of toggling a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Seat was added to the selection.
    Added,
    /// Seat was already selected and has been removed.
    Removed,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Why a toggle left the selection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The seat is held or sold.
    Unavailable,
    /// The selection is already at [`MAX_SELECTION`].
    LimitReached,
    /// The seat is not part of the loaded section.
    UnknownSeat,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::Unavailable => f.write_str("seat is not available"),
            IgnoreReason::LimitReached => {
                write!(f, "at most {} seats can be selected", MAX_SELECTION)
            }
            IgnoreReason::UnknownSeat => f.write_str("seat is not in this section"),
        }
    }
}

/// Ordered set of selected seat ids, capped at [`MAX_SELECTION`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatSelection {
    ids: Vec<SeatId>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a seat in or out of the selection.
    ///
    /// Unavailable seats are ignored. Adding past the limit is a no-op.
    pub fn toggle(&mut self, seat: &Seat) -> ToggleOutcome {
        if !seat.available {
            return ToggleOutcome::Ignored(IgnoreReason::Unavailable);
        }
        if let Some(pos) = self.ids.iter().position(|id| id == &seat.id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= MAX_SELECTION {
            return ToggleOutcome::Ignored(IgnoreReason::LimitReached);
        }
        self.ids.push(seat.id.clone());
        ToggleOutcome::Added
    }

    /// Whether the seat is currently selected.
    pub fn contains(&self, id: &SeatId) -> bool {
        self.ids.contains(id)
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[SeatId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Resolves the selection against the loaded seats, in selection order.
    ///
    /// Ids with no matching seat are skipped.
    pub fn resolve<'a>(&self, seats: &'a [Seat]) -> Vec<&'a Seat> {
        self.ids
            .iter()
            .filter_map(|id| seats.iter().find(|s| &s.id == id))
            .collect()
    }

    /// Sum of the resolved seats' prices.
    pub fn total_price(&self, seats: &[Seat]) -> Money {
        self.resolve(seats).into_iter().map(|s| s.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SectionId;
    use proptest::prelude::*;

    fn seat(id: &str, price: i64) -> Seat {
        Seat::new(
            SeatId::new(id).unwrap(),
            SectionId::new("101").unwrap(),
            "A",
            1,
            Money::from_dollars(price),
        )
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SeatSelection::new();
        let s = seat("101-A-1", 220);

        assert_eq!(selection.toggle(&s), ToggleOutcome::Added);
        assert!(selection.contains(&s.id));

        assert_eq!(selection.toggle(&s), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn fifth_seat_is_a_no_op() {
        let mut selection = SeatSelection::new();
        let seats: Vec<Seat> = (1..=5).map(|n| seat(&format!("101-A-{}", n), 100)).collect();

        for s in &seats[..4] {
            assert_eq!(selection.toggle(s), ToggleOutcome::Added);
        }
        assert_eq!(
            selection.toggle(&seats[4]),
            ToggleOutcome::Ignored(IgnoreReason::LimitReached)
        );
        assert_eq!(selection.len(), MAX_SELECTION);
        assert!(!selection.contains(&seats[4].id));
    }

    #[test]
    fn deselect_still_works_at_limit() {
        let mut selection = SeatSelection::new();
        let seats: Vec<Seat> = (1..=4).map(|n| seat(&format!("101-A-{}", n), 100)).collect();
        for s in &seats {
            selection.toggle(s);
        }
        assert_eq!(selection.toggle(&seats[2]), ToggleOutcome::Removed);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn unavailable_seat_is_ignored() {
        let mut selection = SeatSelection::new();
        let taken = seat("101-A-2", 220).unavailable();
        assert_eq!(
            selection.toggle(&taken),
            ToggleOutcome::Ignored(IgnoreReason::Unavailable)
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn total_tracks_selection_changes() {
        let seats = vec![seat("101-A-1", 220), seat("101-B-1", 210)];
        let mut selection = SeatSelection::new();

        selection.toggle(&seats[0]);
        assert_eq!(selection.total_price(&seats), Money::from_dollars(220));

        selection.toggle(&seats[1]);
        assert_eq!(selection.total_price(&seats), Money::from_dollars(430));

        selection.toggle(&seats[0]);
        assert_eq!(selection.total_price(&seats), Money::from_dollars(210));
    }

    #[test]
    fn total_of_extreme_prices_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);
        let seats: Vec<Seat> = ["101-A-1", "101-A-2", "101-A-3"]
            .iter()
            .map(|id| {
                Seat::new(SeatId::new(*id).unwrap(), SectionId::new("101").unwrap(), "A", 1, huge)
            })
            .collect();
        let mut selection = SeatSelection::new();
        for s in &seats {
            selection.toggle(s);
        }

        assert_eq!(selection.total_price(&seats), Money::from_cents(i64::MAX));
    }

    #[test]
    fn resolve_skips_seats_not_loaded() {
        let loaded = vec![seat("101-A-1", 220)];
        let other = seat("201-C-1", 150);
        let mut selection = SeatSelection::new();
        selection.toggle(&loaded[0]);
        selection.toggle(&other);

        let resolved = selection.resolve(&loaded);
        assert_eq!(resolved.len(), 1);
        assert_eq!(selection.total_price(&loaded), Money::from_dollars(220));
    }

    proptest! {
        #[test]
        fn selection_never_exceeds_limit(toggles in prop::collection::vec(0usize..8, 0..40)) {
            let seats: Vec<Seat> = (0..8).map(|n| seat(&format!("s-{}", n), 10 + n as i64)).collect();
            let mut selection = SeatSelection::new();
            for i in toggles {
                selection.toggle(&seats[i]);
                prop_assert!(selection.len() <= MAX_SELECTION);
            }
        }

        #[test]
        fn total_is_sum_of_selected(toggles in prop::collection::vec(0usize..8, 0..40)) {
            let seats: Vec<Seat> = (0..8).map(|n| seat(&format!("s-{}", n), 10 + n as i64)).collect();
            let mut selection = SeatSelection::new();
            for i in toggles {
                selection.toggle(&seats[i]);
            }
            let expected: i64 = seats
                .iter()
                .filter(|s| selection.contains(&s.id))
                .map(|s| s.price.cents())
                .sum();
            prop_assert_eq!(selection.total_price(&seats).cents(), expected);
        }
    }
}
