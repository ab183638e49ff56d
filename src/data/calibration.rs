//! Plan marker calibration.
//!
//! Markers are calibrated per floor kind and room name, and apply to every
//! house since all houses share the same plans. On disk the calibration is a
//! JSON object keyed by floor label, then room name:
//!
//! ```json
//! { "Planta Baja": { "Salón": { "x": 30.0, "y": 62.5 } } }
//! ```

use crate::error::LoadError;
use crate::model::{Development, FloorName, MarkerPosition};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

type RawCalibration = BTreeMap<String, BTreeMap<String, MarkerPosition>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calibration {
    markers: BTreeMap<FloorName, BTreeMap<String, MarkerPosition>>,
}

impl Calibration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a calibration file. A file that does not exist yet yields an
    /// empty calibration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            debug!(path = %path_ref.display(), "no calibration file, starting empty");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::FileRead {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let raw: RawCalibration =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path_ref.to_path_buf(),
                source,
            })?;

        let calibration = Self::from_raw(raw)?;
        info!(
            path = %path_ref.display(),
            markers = calibration.len(),
            "loaded calibration"
        );
        Ok(calibration)
    }

    fn from_raw(raw: RawCalibration) -> Result<Self, LoadError> {
        let mut markers = BTreeMap::new();
        for (label, rooms) in raw {
            let floor = FloorName::from_label(&label).ok_or_else(|| LoadError::InvalidCalibration {
                floor: label.clone(),
                room: String::new(),
                message: "unknown floor".to_string(),
            })?;
            let mut checked = BTreeMap::new();
            for (room, position) in rooms {
                let Some(valid) = MarkerPosition::new(position.x, position.y) else {
                    return Err(LoadError::InvalidCalibration {
                        floor: label,
                        room,
                        message: format!(
                            "marker ({}, {}) is outside 0-100",
                            position.x, position.y
                        ),
                    });
                };
                checked.insert(room, valid);
            }
            markers.insert(floor, checked);
        }
        Ok(Self { markers })
    }

    /// Writes the calibration as pretty JSON keyed by floor label.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let path_ref = path.as_ref();
        let raw: RawCalibration = self
            .markers
            .iter()
            .map(|(floor, rooms)| (floor.label().to_string(), rooms.clone()))
            .collect();
        let json = serde_json::to_string_pretty(&raw).map_err(|source| LoadError::Json {
            path: path_ref.to_path_buf(),
            source,
        })?;

        std::fs::write(path_ref, json).map_err(|source| LoadError::FileWrite {
            path: path_ref.to_path_buf(),
            source,
        })?;

        info!(path = %path_ref.display(), markers = self.len(), "saved calibration");
        Ok(())
    }

    #[must_use]
    pub fn marker(&self, floor: FloorName, room: &str) -> Option<MarkerPosition> {
        self.markers.get(&floor)?.get(room).copied()
    }

    pub fn set_marker(&mut self, floor: FloorName, room: &str, position: MarkerPosition) {
        self.markers
            .entry(floor)
            .or_default()
            .insert(room.to_string(), position);
    }

    /// Total number of calibrated markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overrides the marker of every matching room in every house. Rooms
    /// without a calibrated marker keep the one they had.
    pub fn apply(&self, development: &mut Development) {
        for house in &mut development.houses {
            for floor in house.floors.iter_mut() {
                let Some(rooms) = self.markers.get(&floor.name) else {
                    continue;
                };
                for room in &mut floor.rooms {
                    if let Some(position) = rooms.get(&room.name) {
                        room.marker_position = Some(*position);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_development;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_is_empty_calibration() {
        let dir = tempfile::tempdir().unwrap();
        let calibration = Calibration::load(dir.path().join("calibration.json")).unwrap();
        assert!(calibration.is_empty());
    }

    #[test]
    fn test_save_then_load_keeps_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibration.json");

        let mut calibration = Calibration::new();
        calibration.set_marker(
            FloorName::GroundFloor,
            "Salón",
            MarkerPosition::clamped(30.0, 62.5),
        );
        calibration.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Planta Baja"));
        assert_eq!(Calibration::load(&path).unwrap(), calibration);
    }

    #[test]
    fn test_out_of_range_marker_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibration.json");
        std::fs::write(&path, r#"{"Sótano": {"Bodega": {"x": 120.0, "y": 5.0}}}"#).unwrap();

        let err = Calibration::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::InvalidCalibration { ref room, .. } if room == "Bodega"));
    }

    #[test]
    fn test_unknown_floor_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibration.json");
        std::fs::write(&path, r#"{"Ático": {}}"#).unwrap();

        assert!(Calibration::load(&path).is_err());
    }

    #[test]
    fn test_apply_updates_every_house() {
        let mut development = builtin_development();
        let mut calibration = Calibration::new();
        let position = MarkerPosition::clamped(12.0, 80.0);
        calibration.set_marker(FloorName::FirstFloor, "Dormitorio 01", position);

        calibration.apply(&mut development);

        for house in &development.houses {
            let floor = house.floor(FloorName::FirstFloor);
            assert_eq!(floor.room("Dormitorio 01").unwrap().marker_position, Some(position));
            assert_eq!(floor.room("Dormitorio 02").unwrap().marker_position, None);
        }
    }
}
