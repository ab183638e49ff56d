use floorplan_inspector::area::{
    resolve_floor_area, resolve_room_area, DisplayMode, FLOOR_CONSTRUCTED_FALLBACK_COEFF,
    ROOM_CONSTRUCTED_FALLBACK_COEFF,
};
use floorplan_inspector::data::builtin_development;
use floorplan_inspector::model::{Floor, FloorName, Floors, House, HouseType, Room, Status};
use floorplan_inspector::report::{build_report, RowKind};
use floorplan_inspector::session::{ActiveView, Session};
use pretty_assertions::assert_eq;

const EPSILON: f64 = 1e-9;

fn house_with(id: &str, build: impl FnMut(FloorName) -> Floor) -> House {
    House {
        id: id.to_string(),
        name: "PRUEBA".to_string(),
        house_type: HouseType::Attached,
        orientation: None,
        parcel_area: 0.0,
        total_constructed_area: 0.0,
        price: 100_000.0,
        status: Status::Available,
        floors: Floors::from_fn(build),
    }
}

#[test]
fn build_report_is_idempotent() {
    let development = builtin_development();
    for house in &development.houses {
        let first = build_report(house, true, DisplayMode::Constructed).unwrap();
        let second = build_report(house, true, DisplayMode::Constructed).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn selection_toggle_is_an_involution() {
    let mut session = Session::new("V3");
    session.toggle_room("Salón");
    let before = session.selection().clone();

    for name in ["Cocina", "Salón", "Habitación que no existe"] {
        session.toggle_room(name);
        session.toggle_room(name);
        assert_eq!(session.selection(), &before);
    }
}

#[test]
fn constructed_fallbacks_use_their_own_coefficients() {
    let room = Room::new("Despensa", 3.2);
    assert_eq!(
        resolve_room_area(&room, DisplayMode::Constructed),
        3.2 * ROOM_CONSTRUCTED_FALLBACK_COEFF
    );

    let floor = Floor::new(FloorName::FirstFloor, 40.0);
    assert_eq!(
        resolve_floor_area(&floor, DisplayMode::Constructed),
        40.0 * FLOOR_CONSTRUCTED_FALLBACK_COEFF
    );
}

#[test]
fn percentages_sum_to_one_hundred_for_every_house() {
    let development = builtin_development();
    for house in &development.houses {
        for mode in [DisplayMode::Useful, DisplayMode::Constructed] {
            let totals = build_report(house, false, mode).unwrap().totals;
            assert!(totals.total > 0.0);
            assert!(
                (totals.pct_interior + totals.pct_exterior - 100.0).abs() < EPSILON,
                "{} {mode}: {} + {}",
                house.id,
                totals.pct_interior,
                totals.pct_exterior
            );
        }
    }
}

#[test]
fn selected_rooms_sum_on_the_active_floor() {
    let house = house_with("T1", |name| {
        let floor = Floor::new(name, 28.99);
        if name == FloorName::GroundFloor {
            floor.with_rooms(vec![Room::new("Salon", 21.04), Room::new("Cocina", 7.95)])
        } else {
            floor
        }
    });

    let mut session = Session::new("T1");
    session.select_all_rooms(house.floor(FloorName::GroundFloor));
    assert_eq!(session.selection().len(), 2);
    assert!((session.total_selected_area(&house) - 28.99).abs() < EPSILON);
}

#[test]
fn vat_adds_ten_percent_to_the_price() {
    let development = builtin_development();
    let v3 = development.house("V3").unwrap();
    assert_eq!(v3.price, 233_000.0);

    let with_vat = build_report(v3, true, DisplayMode::Useful).unwrap();
    assert!((with_vat.final_price - 256_300.0).abs() < 1e-6);
    assert_eq!(with_vat.formatted_price, "256.300 €");

    let without_vat = build_report(v3, false, DisplayMode::Useful).unwrap();
    assert_eq!(without_vat.final_price, 233_000.0);
    assert_eq!(without_vat.formatted_price, "233.000 €");
}

#[test]
fn switching_house_resets_selection_and_view() {
    let mut session = Session::new("V1");
    session.toggle_room("Salón");
    session.toggle_room("Aseo");
    session.open_viewer();

    session.select_house("V2");

    assert!(session.selection().is_empty());
    assert_eq!(session.view(), ActiveView::Standard);
}

#[test]
fn floor_without_exterior_has_a_single_total_row() {
    let house = house_with("T2", |name| {
        let floor = Floor::new(name, 10.0).with_rooms(vec![Room::new("Estancia", 10.0)]);
        if name == FloorName::GroundFloor {
            floor.with_outdoor(5.0)
        } else {
            floor
        }
    });
    let report = build_report(&house, false, DisplayMode::Useful).unwrap();

    let basement: Vec<RowKind> = report
        .section(FloorName::Basement)
        .unwrap()
        .summary_rows()
        .map(|row| row.kind)
        .collect();
    assert_eq!(basement, vec![RowKind::Total]);

    let ground: Vec<RowKind> = report
        .section(FloorName::GroundFloor)
        .unwrap()
        .summary_rows()
        .map(|row| row.kind)
        .collect();
    assert_eq!(ground, vec![RowKind::InteriorTotal, RowKind::Exterior]);
}

#[test]
fn all_zero_house_has_zero_percentages() {
    let house = house_with("T3", |name| Floor::new(name, 0.0));
    let totals = build_report(&house, false, DisplayMode::Constructed)
        .unwrap()
        .totals;

    assert_eq!(totals.total, 0.0);
    assert_eq!(totals.pct_interior, 0.0);
    assert_eq!(totals.pct_exterior, 0.0);
}

#[test]
fn corner_house_constructed_totals_match_declared_total() {
    let development = builtin_development();
    let v1 = development.house("V1").unwrap();
    let totals = build_report(v1, false, DisplayMode::Constructed)
        .unwrap()
        .totals;

    assert!((totals.interior - 162.92).abs() < 1e-6);
    assert!((totals.exterior - 94.44).abs() < 1e-6);
    assert!((totals.total - v1.total_constructed_area).abs() < 1e-6);
}
