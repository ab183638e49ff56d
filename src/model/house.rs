use super::{DataQualityWarning, Floor, FloorName, Floors};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseType {
    #[serde(rename = "Esquina")]
    Corner,
    #[serde(rename = "Normal")]
    Attached,
}

impl fmt::Display for HouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HouseType::Corner => "Esquina",
            HouseType::Attached => "Normal",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Available,
    Reserved,
    Sold,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Available => "Disponible",
            Status::Reserved => "Reservada",
            Status::Sold => "Vendida",
        })
    }
}

/// A house of the development with its four floors.
///
/// `total_constructed_area` is the declared grand total (constructed plus
/// exterior) and, like the floor totals, is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "HouseRecord")]
pub struct House {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub house_type: HouseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    pub parcel_area: f64,
    pub total_constructed_area: f64,
    /// VAT-exclusive price in euros.
    pub price: f64,
    pub status: Status,
    pub floors: Floors,
}

/// Wire shape of a [`House`] before the floor set is validated.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HouseRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    house_type: HouseType,
    #[serde(default)]
    orientation: Option<String>,
    parcel_area: f64,
    total_constructed_area: f64,
    price: f64,
    #[serde(default)]
    status: Status,
    floors: Vec<Floor>,
}

impl TryFrom<HouseRecord> for House {
    type Error = ModelError;

    fn try_from(record: HouseRecord) -> Result<Self, Self::Error> {
        let floors = Floors::from_vec(&record.id, record.floors)?;
        let house = House {
            id: record.id,
            name: record.name,
            house_type: record.house_type,
            orientation: record.orientation,
            parcel_area: record.parcel_area,
            total_constructed_area: record.total_constructed_area,
            price: record.price,
            status: record.status,
            floors,
        };
        house.validate()?;
        Ok(house)
    }
}

impl House {
    #[must_use]
    pub fn floor(&self, name: FloorName) -> &Floor {
        &self.floors[name]
    }

    /// Checks that every floor sits in its own slot and that no area the
    /// report depends on is negative or non-finite.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (slot, floor) in FloorName::ALL.into_iter().zip(self.floors.iter()) {
            if floor.name != slot {
                return Err(ModelError::malformed(
                    &self.id,
                    format!("'{slot}' slot holds floor '{}'", floor.name),
                ));
            }
            check_area(&self.id, floor.total_useful_area, || {
                format!("total useful area of '{}'", floor.name)
            })?;
            if let Some(constructed) = floor.total_constructed_area {
                check_area(&self.id, constructed, || {
                    format!("total constructed area of '{}'", floor.name)
                })?;
            }
            if let Some(outdoor) = floor.outdoor_area {
                check_area(&self.id, outdoor, || {
                    format!("outdoor area of '{}'", floor.name)
                })?;
            }
            for room in &floor.rooms {
                check_area(&self.id, room.useful_area, || {
                    format!("useful area of '{}' on '{}'", room.name, floor.name)
                })?;
                if let Some(constructed) = room.constructed_area {
                    check_area(&self.id, constructed, || {
                        format!("constructed area of '{}' on '{}'", room.name, floor.name)
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Inconsistencies in the source tables. These are reported, never fixed.
    #[must_use]
    pub fn data_quality_warnings(&self) -> Vec<DataQualityWarning> {
        super::quality::check_house(self)
    }
}

fn check_area(
    house_id: &str,
    value: f64,
    what: impl FnOnce() -> String,
) -> Result<(), ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ModelError::malformed(
            house_id,
            format!("{} is {value}", what()),
        ))
    }
}
