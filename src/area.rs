//! Display-mode area resolution.
//!
//! Every area shown to a visitor goes through [`resolve_room_area`] or
//! [`resolve_floor_area`], so the useful/constructed switch and the fallback
//! estimates live in one place.

use crate::model::{Floor, Room};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimates a room's constructed area from its useful area when the source
/// table does not list it.
pub const ROOM_CONSTRUCTED_FALLBACK_COEFF: f64 = 1.25;

/// Estimates a floor's constructed total from its useful total when the
/// source table does not list it. Deliberately distinct from the room value.
pub const FLOOR_CONSTRUCTED_FALLBACK_COEFF: f64 = 1.15;

/// Which surface figure the session presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Superficie útil.
    #[default]
    Useful,
    /// Superficie construida.
    Constructed,
}

impl DisplayMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Useful => DisplayMode::Constructed,
            DisplayMode::Constructed => DisplayMode::Useful,
        }
    }

    /// Suffix used in exported report file names.
    #[must_use]
    pub fn file_suffix(self) -> &'static str {
        match self {
            DisplayMode::Useful => "Utiles",
            DisplayMode::Constructed => "Construidas",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayMode::Useful => "Útil",
            DisplayMode::Constructed => "Construida",
        })
    }
}

/// Area of a room under `mode`.
///
/// Only a missing constructed area falls back to the estimate. A declared
/// `0.0` (open-air solarium zones) is shown as zero, unlike the published
/// site, which treated zero as missing and showed `useful * 1.25`.
#[must_use]
pub fn resolve_room_area(room: &Room, mode: DisplayMode) -> f64 {
    match mode {
        DisplayMode::Useful => room.useful_area,
        DisplayMode::Constructed => room
            .constructed_area
            .unwrap_or(room.useful_area * ROOM_CONSTRUCTED_FALLBACK_COEFF),
    }
}

/// Interior total of a floor under `mode`. Exterior zones are never included.
#[must_use]
pub fn resolve_floor_area(floor: &Floor, mode: DisplayMode) -> f64 {
    match mode {
        DisplayMode::Useful => floor.total_useful_area,
        DisplayMode::Constructed => floor
            .total_constructed_area
            .unwrap_or(floor.total_useful_area * FLOOR_CONSTRUCTED_FALLBACK_COEFF),
    }
}
