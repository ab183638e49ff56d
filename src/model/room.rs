use serde::{Deserialize, Serialize};

/// Upper bound of the percentage space used for plan markers.
pub const MARKER_MAX: f64 = 100.0;

/// Position of a room marker over a floor plan image, in percent of the
/// image width (`x`) and height (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPosition {
    pub x: f64,
    pub y: f64,
}

impl MarkerPosition {
    /// Returns `None` when either coordinate falls outside `0..=100`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Option<Self> {
        let position = Self { x, y };
        position.is_valid().then_some(position)
    }

    /// Builds a position, clamping both coordinates into `0..=100`.
    #[must_use]
    pub fn clamped(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    #[must_use]
    pub fn center() -> Self {
        Self {
            x: MARKER_MAX / 2.0,
            y: MARKER_MAX / 2.0,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..=MARKER_MAX).contains(&self.x) && (0.0..=MARKER_MAX).contains(&self.y)
    }

    /// Moves the marker by the given deltas, staying inside the plan.
    #[must_use]
    pub fn nudged(self, dx: f64, dy: f64) -> Self {
        Self::clamped(self.x + dx, self.y + dy)
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MARKER_MAX)
}

/// A single room of a floor, with its useful and (optional) constructed area
/// in square meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub name: String,
    pub useful_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructed_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_position: Option<MarkerPosition>,
}

impl Room {
    #[must_use]
    pub fn new(name: impl Into<String>, useful_area: f64) -> Self {
        Self {
            name: name.into(),
            useful_area,
            constructed_area: None,
            marker_position: None,
        }
    }

    #[must_use]
    pub fn with_constructed(mut self, constructed_area: f64) -> Self {
        self.constructed_area = Some(constructed_area);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, position: MarkerPosition) -> Self {
        self.marker_position = Some(position);
        self
    }
}
