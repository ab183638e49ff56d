use crate::error::ExportError;
use crate::report::Report;
use std::fs::File;
use std::path::Path;

/// Writes one line per report row, then the grand-total block.
pub fn export_csv<P: AsRef<Path>>(report: &Report, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Planta", "Estancia", "Tipo", "Superficie (m²)"])?;

    for section in &report.sections {
        for row in &section.rows {
            writer.write_record([
                section.floor.label(),
                &row.label,
                row.kind.as_str(),
                &format!("{:.2}", row.area),
            ])?;
        }
    }

    let totals = &report.totals;
    for (label, value) in [
        ("Interior", totals.interior),
        ("Exterior", totals.exterior),
        ("Total", totals.total),
    ] {
        writer.write_record(["TOTAL", label, "GrandTotal", &format!("{value:.2}")])?;
    }
    for (label, value) in [
        ("Interior %", totals.pct_interior),
        ("Exterior %", totals.pct_exterior),
    ] {
        writer.write_record(["TOTAL", label, "Percentage", &format!("{value:.2}")])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
