use super::price::{final_price, format_price};
use super::{FloorSection, GrandTotals, HouseHeader, Report, ReportRow, RowKind};
use crate::area::{resolve_floor_area, resolve_room_area, DisplayMode};
use crate::error::ModelError;
use crate::model::{Floor, House};
use tracing::debug;

/// Builds the report of `house` for the given VAT and display settings.
///
/// Floors are walked basement to roof. Each section lists its rooms in
/// declared order, then either `InteriorTotal` + `Exterior` rows (floor with
/// exterior zones) or a single `Total` row. The grand totals add the
/// authoritative floor totals, never the room rows.
///
/// Pure: the same inputs always produce an identical report.
///
/// # Errors
///
/// Returns [`ModelError::MalformedHouseData`] if any area of the house is
/// negative or non-finite. No partial report is produced.
///
/// # Example
///
/// ```
/// use floorplan_inspector::area::DisplayMode;
/// use floorplan_inspector::data::builtin_development;
/// use floorplan_inspector::report::build_report;
///
/// let development = builtin_development();
/// let house = development.house("V3").expect("V3 is in the catalogue");
/// let report = build_report(house, true, DisplayMode::Useful)?;
/// assert_eq!(report.formatted_price, "256.300 €");
/// # Ok::<(), floorplan_inspector::error::ModelError>(())
/// ```
pub fn build_report(
    house: &House,
    include_vat: bool,
    mode: DisplayMode,
) -> Result<Report, ModelError> {
    house.validate()?;

    let price = final_price(house.price, include_vat);

    let mut interior = 0.0;
    let mut exterior = 0.0;
    let mut sections = Vec::with_capacity(4);

    for floor in house.floors.iter() {
        interior += resolve_floor_area(floor, mode);
        exterior += floor.outdoor();
        sections.push(build_section(floor, mode));
    }

    let totals = GrandTotals::new(interior, exterior);

    debug!(
        house = %house.id,
        mode = ?mode,
        include_vat,
        interior = totals.interior,
        exterior = totals.exterior,
        "built report"
    );

    Ok(Report {
        house: HouseHeader {
            id: house.id.clone(),
            name: house.name.clone(),
            house_type: house.house_type,
            orientation: house.orientation.clone().unwrap_or_else(|| "-".to_string()),
            parcel_area: house.parcel_area,
            declared_total_area: house.total_constructed_area,
            status: house.status,
        },
        display_mode: mode,
        include_vat,
        final_price: price,
        formatted_price: format_price(price),
        sections,
        totals,
    })
}

fn build_section(floor: &Floor, mode: DisplayMode) -> FloorSection {
    let mut rows: Vec<ReportRow> = floor
        .rooms
        .iter()
        .map(|room| ReportRow {
            kind: RowKind::Room,
            label: room.name.clone(),
            area: resolve_room_area(room, mode),
        })
        .collect();

    let floor_area = resolve_floor_area(floor, mode);
    if floor.has_outdoor() {
        rows.push(summary_row(RowKind::InteriorTotal, mode, floor_area));
        rows.push(summary_row(RowKind::Exterior, mode, floor.outdoor()));
    } else {
        rows.push(summary_row(RowKind::Total, mode, floor_area));
    }

    FloorSection {
        floor: floor.name,
        rows,
    }
}

fn summary_row(kind: RowKind, mode: DisplayMode, area: f64) -> ReportRow {
    ReportRow {
        kind,
        label: kind.caption(mode).unwrap_or_default().to_string(),
        area,
    }
}
