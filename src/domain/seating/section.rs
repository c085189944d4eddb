//! Section - a seating zone with shared pricing and level.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Money, SectionId};

/// Stadium level of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Closer to the floor.
    #[default]
    Lower,
    /// Elevated view.
    Upper,
}

impl Level {
    /// Normalizes a backend level string; anything but `"upper"` is lower.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("upper") => Level::Upper,
            _ => Level::Lower,
        }
    }

    /// Level implied by a section id in the fallback catalog: 2xx is upper.
    pub fn from_section_id(id: &SectionId) -> Self {
        if id.as_str().starts_with('2') {
            Level::Upper
        } else {
            Level::Lower
        }
    }

    /// Short description shown next to the section label.
    pub fn description(&self) -> &'static str {
        match self {
            Level::Lower => "Lower level – closer to floor",
            Level::Upper => "Upper level – elevated view",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Lower => f.write_str("lower"),
            Level::Upper => f.write_str("upper"),
        }
    }
}

/// A seating section as listed on the event map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub label: String,
    pub level: Level,
    pub base_price: Money,
    pub total_seats: u32,
    pub available_seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_upper_maps_to_upper() {
        assert_eq!(Level::from_wire(Some("upper")), Level::Upper);
        assert_eq!(Level::from_wire(Some("lower")), Level::Lower);
        assert_eq!(Level::from_wire(Some("club")), Level::Lower);
        assert_eq!(Level::from_wire(None), Level::Lower);
    }

    #[test]
    fn two_hundreds_are_upper() {
        assert_eq!(Level::from_section_id(&SectionId::new("201").unwrap()), Level::Upper);
        assert_eq!(Level::from_section_id(&SectionId::new("101").unwrap()), Level::Lower);
    }
}
