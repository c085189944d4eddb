//! Seat - a single sellable position within a section.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Money, SeatId, SectionId};

/// A seat on the map.
///
/// Availability flips to `false` while the seat is held or sold and back
/// when a hold lapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: SeatId,
    pub section_id: SectionId,
    pub row: String,
    pub number: u32,
    pub price: Money,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Seat {
    /// Creates an available seat.
    pub fn new(
        id: SeatId,
        section_id: SectionId,
        row: impl Into<String>,
        number: u32,
        price: Money,
    ) -> Self {
        Self {
            id,
            section_id,
            row: row.into(),
            number,
            price,
            available: true,
        }
    }

    /// Marks the seat as unavailable.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// `Section 101 — Row A, Seat 1`
impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section {} — Row {}, Seat {}",
            self.section_id, self.row, self.number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_location() {
        let seat = Seat::new(
            SeatId::new("101-A-1").unwrap(),
            SectionId::new("101").unwrap(),
            "A",
            1,
            Money::from_dollars(220),
        );
        assert_eq!(seat.to_string(), "Section 101 — Row A, Seat 1");
    }

    #[test]
    fn serializes_camel_case() {
        let seat = Seat::new(
            SeatId::new("201-C-2").unwrap(),
            SectionId::new("201").unwrap(),
            "C",
            2,
            Money::from_dollars(150),
        );
        let json = serde_json::to_value(&seat).unwrap();
        assert_eq!(json["sectionId"], "201");
        assert_eq!(json["price"], 150);
    }

    #[test]
    fn missing_availability_defaults_to_available() {
        let json = r#"{"id":"101-B-1","sectionId":"101","row":"B","number":1,"price":210}"#;
        let seat: Seat = serde_json::from_str(json).unwrap();
        assert!(seat.available);
    }
}
