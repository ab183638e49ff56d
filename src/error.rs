//! Error types for Floorplan Inspector.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when house data violates the model's structural rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The house is missing a floor, repeats one, or carries a negative area.
    #[error("malformed data for house '{house_id}': {reason}")]
    MalformedHouseData { house_id: String, reason: String },
}

impl ModelError {
    pub(crate) fn malformed(house_id: &str, reason: impl Into<String>) -> Self {
        Self::MalformedHouseData {
            house_id: house_id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when loading houses or calibration data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read an input file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write calibration data back to disk.
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two houses share the same identifier.
    #[error("duplicate house identifier '{id}'")]
    DuplicateHouse { id: String },

    /// A calibration marker lies outside the 0-100 percentage space.
    #[error("invalid calibration for '{floor}' / '{room}': {message}")]
    InvalidCalibration {
        floor: String,
        room: String,
        message: String,
    },

    /// A loaded house failed validation.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors that can occur when exporting reports.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
