//! Built-in demo catalog.
//!
//! Used whenever the backend cannot list sections or seats, so the map is
//! never empty in a demo. Sections are derived from the seats by grouping
//! on `section_id`.

use once_cell::sync::Lazy;

use crate::domain::foundation::{Money, SeatId, SectionId};

use super::{Level, Seat, Section};

/// `(id, section, row, number, price, available)`
const CATALOG: &[(&str, &str, &str, u32, i64, bool)] = &[
    ("101-A-1", "101", "A", 1, 220, true),
    ("101-A-2", "101", "A", 2, 220, false),
    ("101-A-3", "101", "A", 3, 220, true),
    ("101-B-1", "101", "B", 1, 210, true),
    ("201-C-1", "201", "C", 1, 150, true),
    ("201-C-2", "201", "C", 2, 150, true),
];

static MOCK_SEATS: Lazy<Vec<Seat>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|&(id, section, row, number, price, available)| Seat {
            id: SeatId::new(id).expect("catalog seat ids are valid"),
            section_id: SectionId::new(section).expect("catalog section ids are valid"),
            row: row.to_string(),
            number,
            price: Money::from_dollars(price),
            available,
        })
        .collect()
});

/// Every seat in the demo catalog.
pub fn mock_seats() -> &'static [Seat] {
    &MOCK_SEATS
}

/// Demo seats belonging to one section.
pub fn mock_seats_in(section_id: &SectionId) -> Vec<Seat> {
    MOCK_SEATS
        .iter()
        .filter(|s| &s.section_id == section_id)
        .cloned()
        .collect()
}

/// Demo sections derived from the demo seats.
pub fn mock_sections() -> Vec<Section> {
    sections_from_seats(&MOCK_SEATS)
}

/// Partitions seats by section, in order of first appearance.
///
/// Label is the section id, level is upper for 2xx ids, base price is the
/// first seat's price.
pub fn sections_from_seats(seats: &[Seat]) -> Vec<Section> {
    let mut partitions: Vec<(SectionId, Vec<&Seat>)> = Vec::new();
    for seat in seats {
        match partitions.iter_mut().find(|(id, _)| id == &seat.section_id) {
            Some((_, members)) => members.push(seat),
            None => partitions.push((seat.section_id.clone(), vec![seat])),
        }
    }

    partitions
        .into_iter()
        .map(|(id, members)| Section {
            label: id.to_string(),
            level: Level::from_section_id(&id),
            base_price: members.first().map(|s| s.price).unwrap_or(Money::ZERO),
            total_seats: members.len() as u32,
            available_seats: members.iter().filter(|s| s.available).count() as u32,
            id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_seats() {
        assert_eq!(mock_seats().len(), 6);
        assert!(!mock_seats()[1].available);
    }

    #[test]
    fn sections_are_partitioned_by_section_id() {
        let sections = mock_sections();
        assert_eq!(sections.len(), 2);

        let lower = &sections[0];
        assert_eq!(lower.id.as_str(), "101");
        assert_eq!(lower.label, "101");
        assert_eq!(lower.level, Level::Lower);
        assert_eq!(lower.base_price, Money::from_dollars(220));
        assert_eq!(lower.total_seats, 4);
        assert_eq!(lower.available_seats, 3);

        let upper = &sections[1];
        assert_eq!(upper.id.as_str(), "201");
        assert_eq!(upper.level, Level::Upper);
        assert_eq!(upper.base_price, Money::from_dollars(150));
        assert_eq!(upper.total_seats, 2);
        assert_eq!(upper.available_seats, 2);
    }

    #[test]
    fn seats_filter_by_section() {
        let upper = mock_seats_in(&SectionId::new("201").unwrap());
        assert_eq!(upper.len(), 2);
        assert!(upper.iter().all(|s| s.section_id.as_str() == "201"));

        assert!(mock_seats_in(&SectionId::new("999").unwrap()).is_empty());
    }

    #[test]
    fn empty_seat_list_gives_no_sections() {
        assert!(sections_from_seats(&[]).is_empty());
    }
}
