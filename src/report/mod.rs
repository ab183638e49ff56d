//! Renderer-agnostic house reports.
//!
//! [`build_report`] turns a [`House`](crate::model::House) into a [`Report`]:
//! header data, the final price, one table per floor with its summary rows
//! and the interior/exterior breakdown. Renderers in [`crate::export`] only
//! lay this value out; they never recompute areas.

pub mod builder;
pub mod price;

pub use builder::build_report;
pub use price::{format_price, VAT_MULTIPLIER};

use crate::area::DisplayMode;
use crate::model::{FloorName, HouseType, Status};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub house: HouseHeader,
    pub display_mode: DisplayMode,
    pub include_vat: bool,
    pub final_price: f64,
    pub formatted_price: String,
    pub sections: Vec<FloorSection>,
    pub totals: GrandTotals,
}

impl Report {
    /// File name a renderer should save this report under, e.g.
    /// `Informe_V3_Construidas.json`.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        report_file_name(&self.house.id, self.display_mode, extension)
    }

    #[must_use]
    pub fn section(&self, floor: FloorName) -> Option<&FloorSection> {
        self.sections.iter().find(|s| s.floor == floor)
    }
}

#[must_use]
pub fn report_file_name(house_id: &str, mode: DisplayMode, extension: &str) -> String {
    format!("Informe_{house_id}_{}.{extension}", mode.file_suffix())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseHeader {
    pub id: String,
    pub name: String,
    pub house_type: HouseType,
    /// `-` when the house has no declared orientation.
    pub orientation: String,
    pub parcel_area: f64,
    /// Declared constructed + exterior total, shown as-is.
    pub declared_total_area: f64,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorSection {
    pub floor: FloorName,
    pub rows: Vec<ReportRow>,
}

impl FloorSection {
    pub fn summary_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| r.kind != RowKind::Room)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub kind: RowKind,
    pub label: String,
    /// Square meters at full precision; renderers round for display.
    pub area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowKind {
    Room,
    /// Interior total of a floor that also has exterior zones.
    InteriorTotal,
    /// Exterior zones of the floor.
    Exterior,
    /// Interior total of a floor without exterior zones.
    Total,
}

impl RowKind {
    /// Stable code written to tabular exports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RowKind::Room => "Room",
            RowKind::InteriorTotal => "InteriorTotal",
            RowKind::Exterior => "Exterior",
            RowKind::Total => "Total",
        }
    }

    /// Caption of a summary row; `None` for room rows, which use the room name.
    #[must_use]
    pub fn caption(self, mode: DisplayMode) -> Option<&'static str> {
        match (self, mode) {
            (RowKind::Room, _) => None,
            (RowKind::InteriorTotal, DisplayMode::Useful) => Some("TOTAL ÚTIL INTERIOR"),
            (RowKind::InteriorTotal, DisplayMode::Constructed) => {
                Some("TOTAL CONSTRUIDA INTERIOR")
            }
            (RowKind::Exterior, _) => Some("ZONAS EXTERIORES"),
            (RowKind::Total, DisplayMode::Useful) => Some("TOTAL ÚTIL"),
            (RowKind::Total, DisplayMode::Constructed) => Some("TOTAL CONSTRUIDA"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandTotals {
    pub interior: f64,
    pub exterior: f64,
    pub total: f64,
    pub pct_interior: f64,
    pub pct_exterior: f64,
}

impl GrandTotals {
    /// Derives the total and percentages. A zero total yields 0 % for both
    /// shares rather than NaN.
    #[must_use]
    pub fn new(interior: f64, exterior: f64) -> Self {
        let total = interior + exterior;
        let (pct_interior, pct_exterior) = if total > 0.0 {
            (interior / total * 100.0, exterior / total * 100.0)
        } else {
            (0.0, 0.0)
        };
        Self {
            interior,
            exterior,
            total,
            pct_interior,
            pct_exterior,
        }
    }
}
