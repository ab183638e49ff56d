pub mod csv;
pub mod json;
pub mod text;

pub use crate::error::ExportError;
pub use self::csv::export_csv;
pub use self::json::export_json;
pub use self::text::{export_text, render_text};

use crate::report::Report;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Text => "text",
        })
    }
}

/// Writes `report` into `dir` under its conventional file name
/// (`Informe_<id>_<Construidas|Utiles>.<ext>`) and returns the full path.
pub fn export_report<P: AsRef<Path>>(
    report: &Report,
    dir: P,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(report.file_name(format.extension()));

    match format {
        ExportFormat::Json => export_json(report, &path)?,
        ExportFormat::Csv => export_csv(report, &path)?,
        ExportFormat::Text => export_text(report, &path)?,
    }

    info!(house = %report.house.id, path = %path.display(), %format, "exported report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::DisplayMode;
    use crate::data::builtin_development;
    use crate::report::build_report;
    use pretty_assertions::assert_eq;

    fn report(mode: DisplayMode) -> Report {
        let development = builtin_development();
        build_report(development.house("V3").unwrap(), true, mode).unwrap()
    }

    #[test]
    fn test_export_uses_report_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_report(&report(DisplayMode::Constructed), dir.path(), ExportFormat::Json)
            .unwrap();

        assert_eq!(path, dir.path().join("Informe_V3_Construidas.json"));
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["house"]["id"], "V3");
        assert_eq!(value["formattedPrice"], "256.300 €");
        assert_eq!(value["sections"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_csv_has_one_line_per_row_plus_totals() {
        let dir = tempfile::tempdir().unwrap();
        let report = report(DisplayMode::Useful);
        let path = export_report(&report, dir.path(), ExportFormat::Csv).unwrap();

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        let records: Vec<::csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        let row_count: usize = report.sections.iter().map(|s| s.rows.len()).sum();

        assert_eq!(records.len(), row_count + 5);
        assert_eq!(&records[0][0], "Sótano");
        assert_eq!(&records[0][1], "Bodega");
        assert_eq!(&records[0][3], "34.01");
    }

    #[test]
    fn test_csv_row_kinds_use_stable_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_report(&report(DisplayMode::Useful), dir.path(), ExportFormat::Csv)
            .unwrap();

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        let basement: Vec<String> = reader
            .records()
            .map(Result::unwrap)
            .filter(|record| &record[0] == "Sótano")
            .map(|record| record[2].to_string())
            .collect();

        assert_eq!(
            basement,
            vec!["Room", "Room", "Room", "Room", "InteriorTotal", "Exterior"]
        );
    }

    #[test]
    fn test_text_export_writes_rendered_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = report(DisplayMode::Useful);
        let path = export_report(&report, dir.path(), ExportFormat::Text).unwrap();

        assert!(path.ends_with("Informe_V3_Utiles.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), render_text(&report));
    }

    #[test]
    fn test_missing_directory_is_file_create_error() {
        let err = export_report(
            &report(DisplayMode::Useful),
            "/nonexistent/dir",
            ExportFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::FileCreate { .. }));
    }
}
