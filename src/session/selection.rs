use crate::area::{resolve_room_area, DisplayMode};
use crate::model::Floor;
use std::collections::BTreeSet;

/// Rooms the visitor has ticked to add up.
///
/// Holds names only. Totals are always computed by walking a floor's rooms,
/// so names that do not exist on that floor never contribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rooms: BTreeSet<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the room if absent, removes it otherwise. Returns whether the
    /// room is selected afterwards.
    pub fn toggle(&mut self, room_name: &str) -> bool {
        if self.rooms.remove(room_name) {
            false
        } else {
            self.rooms.insert(room_name.to_string());
            true
        }
    }

    /// Replaces the selection with exactly `room_names`.
    pub fn select_all<I, S>(&mut self, room_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rooms = room_names.into_iter().map(Into::into).collect();
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    #[must_use]
    pub fn contains(&self, room_name: &str) -> bool {
        self.rooms.contains(room_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(String::as_str)
    }

    /// Number of selected rooms that exist on `floor`.
    #[must_use]
    pub fn count_on(&self, floor: &Floor) -> usize {
        floor
            .rooms
            .iter()
            .filter(|room| self.contains(&room.name))
            .count()
    }

    /// Sum of the selected rooms of `floor` under `mode`, at full precision.
    #[must_use]
    pub fn total_selected_area(&self, floor: &Floor, mode: DisplayMode) -> f64 {
        floor
            .rooms
            .iter()
            .filter(|room| self.contains(&room.name))
            .map(|room| resolve_room_area(room, mode))
            .sum()
    }
}
