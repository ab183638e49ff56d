//! Consistency checks between declared totals and room-level figures.

use super::{FloorName, House};
use std::fmt;

/// Difference below which a declared total matches its room sum.
pub const AREA_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub enum DataQualityWarning {
    /// Declared useful total of a floor differs from the sum of its rooms.
    FloorTotalMismatch {
        house_id: String,
        floor: FloorName,
        declared: f64,
        room_sum: f64,
    },
    /// A room declares a constructed area smaller than its useful area.
    ConstructedBelowUseful {
        house_id: String,
        floor: FloorName,
        room: String,
        useful: f64,
        constructed: f64,
    },
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityWarning::FloorTotalMismatch {
                house_id,
                floor,
                declared,
                room_sum,
            } => write!(
                f,
                "{house_id} / {floor}: declared useful total {declared:.2} m² but rooms sum to {room_sum:.2} m²"
            ),
            DataQualityWarning::ConstructedBelowUseful {
                house_id,
                floor,
                room,
                useful,
                constructed,
            } => write!(
                f,
                "{house_id} / {floor} / {room}: constructed area {constructed:.2} m² is below useful area {useful:.2} m²"
            ),
        }
    }
}

pub(super) fn check_house(house: &House) -> Vec<DataQualityWarning> {
    let mut warnings = Vec::new();

    for floor in house.floors.iter() {
        let room_sum = floor.rooms_useful_sum();
        if (room_sum - floor.total_useful_area).abs() > AREA_TOLERANCE {
            warnings.push(DataQualityWarning::FloorTotalMismatch {
                house_id: house.id.clone(),
                floor: floor.name,
                declared: floor.total_useful_area,
                room_sum,
            });
        }

        for room in &floor.rooms {
            if let Some(constructed) = room.constructed_area {
                if constructed < room.useful_area {
                    warnings.push(DataQualityWarning::ConstructedBelowUseful {
                        house_id: house.id.clone(),
                        floor: floor.name,
                        room: room.name.clone(),
                        useful: room.useful_area,
                        constructed,
                    });
                }
            }
        }
    }

    warnings
}
