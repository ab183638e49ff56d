//! Visitor session state.
//!
//! A [`Session`] is owned by whichever front end is driving it and passed by
//! reference to the aggregation and report code. It holds the active house
//! and floor, the room selection, the view state and the two display toggles.

pub mod selection;
pub mod view;

pub use selection::Selection;
pub use view::ActiveView;

use crate::area::DisplayMode;
use crate::error::ModelError;
use crate::model::{Floor, FloorName, House};
use crate::report::{build_report, Report};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    house_id: String,
    floor: FloorName,
    view: ActiveView,
    selection: Selection,
    display_mode: DisplayMode,
    include_vat: bool,
}

impl Session {
    /// Starts on the ground floor of `house_id`, in useful mode without VAT.
    #[must_use]
    pub fn new(house_id: impl Into<String>) -> Self {
        Self {
            house_id: house_id.into(),
            floor: FloorName::GroundFloor,
            view: ActiveView::Standard,
            selection: Selection::new(),
            display_mode: DisplayMode::Useful,
            include_vat: false,
        }
    }

    #[must_use]
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    #[must_use]
    pub fn with_vat(mut self, include_vat: bool) -> Self {
        self.include_vat = include_vat;
        self
    }

    #[must_use]
    pub fn house_id(&self) -> &str {
        &self.house_id
    }

    #[must_use]
    pub fn floor(&self) -> FloorName {
        self.floor
    }

    #[must_use]
    pub fn view(&self) -> ActiveView {
        self.view
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[must_use]
    pub fn include_vat(&self) -> bool {
        self.include_vat
    }

    /// Switches the active house. Room names are only meaningful inside one
    /// house, so a real change clears the selection and returns to the
    /// standard view. Returns whether the house changed.
    pub fn select_house(&mut self, house_id: &str) -> bool {
        if self.house_id == house_id {
            return false;
        }
        self.house_id = house_id.to_string();
        self.selection.clear();
        self.view = ActiveView::Standard;
        true
    }

    /// Switches the active floor, clearing the selection on a real change.
    pub fn select_floor(&mut self, floor: FloorName) -> bool {
        if self.floor == floor {
            return false;
        }
        self.floor = floor;
        self.selection.clear();
        true
    }

    pub fn open_viewer(&mut self) {
        self.view = self.view.opened();
    }

    pub fn close_viewer(&mut self) {
        self.view = self.view.closed();
    }

    pub fn toggle_room(&mut self, room_name: &str) -> bool {
        self.selection.toggle(room_name)
    }

    pub fn select_all_rooms(&mut self, floor: &Floor) {
        self.selection.select_all(floor.room_names());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    pub fn toggle_vat(&mut self) {
        self.include_vat = !self.include_vat;
    }

    /// The active floor of `house`.
    #[must_use]
    pub fn active_floor<'a>(&self, house: &'a House) -> &'a Floor {
        house.floor(self.floor)
    }

    /// Running total of the selected rooms on the active floor of `house`.
    #[must_use]
    pub fn total_selected_area(&self, house: &House) -> f64 {
        self.selection
            .total_selected_area(self.active_floor(house), self.display_mode)
    }

    /// Builds the report of `house` under the session's VAT and display mode.
    pub fn report(&self, house: &House) -> Result<Report, ModelError> {
        build_report(house, self.include_vat, self.display_mode)
    }
}
