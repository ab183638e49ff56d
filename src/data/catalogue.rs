//! Built-in catalogue: the 16 houses of Residencial Huertos de la Cañada.
//!
//! Figures come from the architect's surface tables. All houses share the
//! same room distribution; corner plots differ in price, declared grand
//! total and the side patio added to the ground-floor exterior.

use crate::model::{Development, Floor, FloorName, Floors, House, HouseType, Room, Status};

pub const DEVELOPMENT_NAME: &str = "Residencial Huertos de la Cañada";
pub const DEVELOPMENT_ADDRESS: &str = "Calle Carlos V, La Cañada de San Urbano, Almería";

// (name, useful m², constructed m²)
const BASEMENT_ROOMS: &[(&str, f64, f64)] = &[
    ("Bodega", 34.01, 38.89),
    ("Escalera", 3.86, 4.41),
    ("Vestíbulo", 1.72, 1.97),
    ("Aseo", 2.82, 3.22),
];

const GROUND_ROOMS: &[(&str, f64, f64)] = &[
    ("Salón", 21.58, 27.52),
    ("Cocina", 8.02, 10.23),
    ("Vestíbulo", 4.01, 5.11),
    ("Escalera", 4.39, 5.60),
    ("Aseo", 1.53, 1.95),
];

const FIRST_ROOMS: &[(&str, f64, f64)] = &[
    ("Dormitorio 01", 12.20, 15.93),
    ("Dormitorio 02", 9.50, 12.40),
    ("Dormitorio 03", 8.93, 11.66),
    ("Baño Principal", 3.95, 5.16),
    ("Baño Secundario", 2.63, 3.43),
    ("Vestíbulo", 3.22, 4.20),
    ("Escalera", 2.31, 3.02),
];

const ROOF_ROOMS: &[(&str, f64, f64)] = &[("Castillete de Acceso", 3.56, 8.23)];

// Open-air zones listed with the roof rooms; no constructed surface.
const SOLARIUM_ZONES: &[(&str, f64, f64)] = &[
    ("Área 01 (Solárium)", 22.64, 0.0),
    ("Área 02 (Solárium)", 10.47, 0.0),
    ("Área 03 (Solárium)", 10.45, 0.0),
];

const HOUSE_NAMES: [&str; 16] = [
    "VILLA GRANADA",
    "VILLA ALOE",
    "VILLA MARGARITA",
    "VILLA LAVANDA",
    "VILLA NARANJA",
    "VILLA TOMILLO",
    "VILLA LIMONES",
    "VILLA ROMERO",
    "VILLA ALBAHACA",
    "VILLA MANZANILLA",
    "VILLA INOJOS",
    "VILLA MENTA",
    "VILLA JAMINES",
    "VILLA OREGANO",
    "VILLA HIERBA BUENA",
    "VILLA AMAPOLA",
];

const BASEMENT_EXTERIOR: f64 = 2.67; // patinillo
const FIRST_EXTERIOR: f64 = 4.39; // terraza
const GROUND_EXTERIOR_BASE: f64 = 10.49 + 12.98 + 20.35; // trasero + delantero cub. + desc.

/// Per-plot figures that vary along the row of houses.
struct PlotTerms {
    house_type: HouseType,
    declared_total: f64,
    side_patio: f64,
    price: f64,
}

fn plot_terms(number: usize) -> PlotTerms {
    match number {
        1 | 2 => PlotTerms {
            house_type: HouseType::Corner,
            declared_total: 257.36,
            side_patio: 0.0,
            price: 250_000.0,
        },
        15 => PlotTerms {
            house_type: HouseType::Corner,
            declared_total: 272.29,
            side_patio: 14.93,
            price: 255_000.0,
        },
        16 => PlotTerms {
            house_type: HouseType::Corner,
            declared_total: 305.09,
            side_patio: 47.73,
            price: 260_000.0,
        },
        _ => PlotTerms {
            house_type: HouseType::Attached,
            declared_total: 254.79,
            side_patio: 0.0,
            price: 233_000.0,
        },
    }
}

fn rooms(table: &[(&str, f64, f64)]) -> Vec<Room> {
    table
        .iter()
        .map(|&(name, useful, constructed)| Room::new(name, useful).with_constructed(constructed))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn build_house(number: usize) -> House {
    let terms = plot_terms(number);
    let ground_exterior = round2(GROUND_EXTERIOR_BASE + terms.side_patio);
    let roof_exterior: f64 = SOLARIUM_ZONES.iter().map(|&(_, area, _)| area).sum();

    let floors = Floors::from_fn(|name| match name {
        FloorName::Basement => Floor::new(name, 42.41)
            .with_constructed(48.49)
            .with_outdoor(BASEMENT_EXTERIOR)
            .with_rooms(rooms(BASEMENT_ROOMS)),
        FloorName::GroundFloor => Floor::new(name, 39.53)
            .with_constructed(50.41)
            .with_outdoor(ground_exterior)
            .with_rooms(rooms(GROUND_ROOMS)),
        FloorName::FirstFloor => Floor::new(name, 42.74)
            .with_constructed(55.79)
            .with_outdoor(FIRST_EXTERIOR)
            .with_rooms(rooms(FIRST_ROOMS)),
        FloorName::RoofFloor => {
            let mut roof_rooms = rooms(ROOF_ROOMS);
            roof_rooms.extend(rooms(SOLARIUM_ZONES));
            Floor::new(name, 3.56)
                .with_constructed(8.23)
                .with_outdoor(round2(roof_exterior))
                .with_rooms(roof_rooms)
        }
    });

    House {
        id: format!("V{number}"),
        name: HOUSE_NAMES[number - 1].to_string(),
        house_type: terms.house_type,
        orientation: Some(if number % 2 == 0 { "Oeste" } else { "Este" }.to_string()),
        parcel_area: (55.0 + ground_exterior + 10.0).round(),
        total_constructed_area: terms.declared_total,
        price: terms.price,
        status: Status::Available,
        floors,
    }
}

/// The development as published, houses V1 to V16.
#[must_use]
pub fn builtin_development() -> Development {
    Development::new(
        DEVELOPMENT_NAME.to_string(),
        DEVELOPMENT_ADDRESS.to_string(),
        (1..=HOUSE_NAMES.len()).map(build_house).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalogue_has_sixteen_valid_houses() {
        let development = builtin_development();
        assert_eq!(development.total_houses(), 16);
        for house in &development.houses {
            house.validate().unwrap();
        }
        let ids: Vec<&str> = development.houses.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids[0], "V1");
        assert_eq!(ids[15], "V16");
    }

    #[test]
    fn test_plot_terms_by_position() {
        let development = builtin_development();
        let v2 = development.house("V2").unwrap();
        let v7 = development.house("V7").unwrap();
        let v16 = development.house("V16").unwrap();

        assert_eq!(v2.house_type, HouseType::Corner);
        assert_eq!(v2.orientation.as_deref(), Some("Oeste"));
        assert_eq!(v7.house_type, HouseType::Attached);
        assert_eq!(v7.orientation.as_deref(), Some("Este"));
        assert_eq!(v7.price, 233_000.0);
        assert_eq!(v16.floor(FloorName::GroundFloor).outdoor(), 91.55);
        assert_eq!(v16.parcel_area, 157.0);
        assert_eq!(v7.parcel_area, 109.0);
    }

    #[test]
    fn test_roof_lists_solarium_zones() {
        let development = builtin_development();
        let roof = development.house("V5").unwrap().floor(FloorName::RoofFloor);
        assert_eq!(roof.rooms.len(), 4);
        assert_eq!(roof.outdoor(), 43.56);
    }
}
