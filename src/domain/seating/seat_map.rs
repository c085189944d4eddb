//! SeatMap - client-side state of the seat map view.
//!
//! Holds the sections of an event, the section being browsed, its seats,
//! and the buyer's selection. Switching sections clears the selection.

use crate::domain::foundation::{Money, SeatId, SectionId};

use super::{IgnoreReason, Seat, SeatSelection, Section, ToggleOutcome};

#[derive(Debug, Clone, Default)]
pub struct SeatMap {
    sections: Vec<Section>,
    selected_section: Option<SectionId>,
    seats: Vec<Seat>,
    selection: SeatSelection,
}

impl SeatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the section list and focuses the first section.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.selected_section = sections.first().map(|s| s.id.clone());
        self.sections = sections;
        self.seats.clear();
        self.selection.clear();
    }

    /// Focuses a section, clearing its seats and the selection.
    ///
    /// Returns `false` if the section is not on the map.
    pub fn select_section(&mut self, id: &SectionId) -> bool {
        if !self.sections.iter().any(|s| &s.id == id) {
            return false;
        }
        self.selected_section = Some(id.clone());
        self.seats.clear();
        self.selection.clear();
        true
    }

    /// Replaces the seats of the focused section.
    pub fn set_seats(&mut self, seats: Vec<Seat>) {
        self.seats = seats;
    }

    /// Toggles a loaded seat by id.
    pub fn toggle_seat(&mut self, id: &SeatId) -> ToggleOutcome {
        match self.seats.iter().find(|s| &s.id == id) {
            Some(seat) => self.selection.toggle(seat),
            None => ToggleOutcome::Ignored(IgnoreReason::UnknownSeat),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn selected_section_id(&self) -> Option<&SectionId> {
        self.selected_section.as_ref()
    }

    pub fn selected_section(&self) -> Option<&Section> {
        let id = self.selected_section.as_ref()?;
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn selection(&self) -> &SeatSelection {
        &self.selection
    }

    /// Selected seats resolved against the loaded seats, in selection order.
    pub fn selected_seats(&self) -> Vec<Seat> {
        self.selection
            .resolve(&self.seats)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn total_price(&self) -> Money {
        self.selection.total_price(&self.seats)
    }
}
