use super::Room;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// The four levels every house is built with, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FloorName {
    #[serde(rename = "Sótano")]
    Basement,
    #[serde(rename = "Planta Baja")]
    GroundFloor,
    #[serde(rename = "Planta Primera")]
    FirstFloor,
    #[serde(rename = "Planta Cubierta")]
    RoofFloor,
}

impl FloorName {
    pub const ALL: [FloorName; 4] = [
        FloorName::Basement,
        FloorName::GroundFloor,
        FloorName::FirstFloor,
        FloorName::RoofFloor,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            FloorName::Basement => 0,
            FloorName::GroundFloor => 1,
            FloorName::FirstFloor => 2,
            FloorName::RoofFloor => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FloorName::Basement => "Sótano",
            FloorName::GroundFloor => "Planta Baja",
            FloorName::FirstFloor => "Planta Primera",
            FloorName::RoofFloor => "Planta Cubierta",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.label() == label)
    }

    /// Next floor up, wrapping from the roof back to the basement.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next floor down, wrapping from the basement to the roof.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FloorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One level of a house.
///
/// `total_useful_area` and `total_constructed_area` come from the architect's
/// surface tables and are authoritative: they are not re-derived from the
/// rooms and may legitimately differ from the room sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub name: FloorName,
    pub rooms: Vec<Room>,
    pub total_useful_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_constructed_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_area: Option<f64>,
}

impl Floor {
    #[must_use]
    pub fn new(name: FloorName, total_useful_area: f64) -> Self {
        Self {
            name,
            rooms: Vec::new(),
            total_useful_area,
            total_constructed_area: None,
            outdoor_area: None,
        }
    }

    #[must_use]
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    #[must_use]
    pub fn with_constructed(mut self, total_constructed_area: f64) -> Self {
        self.total_constructed_area = Some(total_constructed_area);
        self
    }

    #[must_use]
    pub fn with_outdoor(mut self, outdoor_area: f64) -> Self {
        self.outdoor_area = Some(outdoor_area);
        self
    }

    /// Exterior surface of the floor, zero when none is declared.
    #[must_use]
    pub fn outdoor(&self) -> f64 {
        self.outdoor_area.unwrap_or(0.0)
    }

    #[must_use]
    pub fn has_outdoor(&self) -> bool {
        self.outdoor() > 0.0
    }

    #[must_use]
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|r| r.name.as_str())
    }

    /// Sum of the rooms' useful areas, for comparison with the declared total.
    #[must_use]
    pub fn rooms_useful_sum(&self) -> f64 {
        self.rooms.iter().map(|r| r.useful_area).sum()
    }
}

/// Exactly one [`Floor`] per [`FloorName`], stored in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Floors([Floor; 4]);

impl Floors {
    /// Builds the set by asking `build` for each floor in order. The floor's
    /// `name` is forced to the slot it fills.
    pub fn from_fn(mut build: impl FnMut(FloorName) -> Floor) -> Self {
        Self(std::array::from_fn(|i| {
            let name = FloorName::ALL[i];
            let mut floor = build(name);
            floor.name = name;
            floor
        }))
    }

    /// Arranges a loose list of floors, failing unless each [`FloorName`]
    /// appears exactly once.
    pub fn from_vec(house_id: &str, floors: Vec<Floor>) -> Result<Self, ModelError> {
        if floors.len() != FloorName::ALL.len() {
            return Err(ModelError::malformed(
                house_id,
                format!(
                    "expected {} floors, found {}",
                    FloorName::ALL.len(),
                    floors.len()
                ),
            ));
        }

        let mut slots: [Option<Floor>; 4] = Default::default();
        for floor in floors {
            let slot = &mut slots[floor.name.index()];
            if slot.is_some() {
                return Err(ModelError::malformed(
                    house_id,
                    format!("floor '{}' appears more than once", floor.name),
                ));
            }
            *slot = Some(floor);
        }

        match slots {
            [Some(basement), Some(ground), Some(first), Some(roof)] => {
                Ok(Self([basement, ground, first, roof]))
            }
            _ => Err(ModelError::malformed(house_id, "missing floor")),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Floor> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Floor> {
        self.0.iter_mut()
    }
}

impl Index<FloorName> for Floors {
    type Output = Floor;

    fn index(&self, name: FloorName) -> &Floor {
        &self.0[name.index()]
    }
}

impl IndexMut<FloorName> for Floors {
    fn index_mut(&mut self, name: FloorName) -> &mut Floor {
        &mut self.0[name.index()]
    }
}
