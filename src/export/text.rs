//! Plain-text rendering of a [`Report`], split into fixed-height pages.

use crate::area::DisplayMode;
use crate::error::ExportError;
use crate::report::{FloorSection, Report};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Lines available on one page.
pub const PAGE_LINES: usize = 60;

/// Separates pages in the joined output (form feed).
pub const PAGE_BREAK: &str = "\u{c}\n";

const LABEL_WIDTH: usize = 36;
const AREA_WIDTH: usize = 14;

const DISCLAIMER: &str = "Nota: documento informativo. Las superficies pueden sufrir ligeras \
variaciones por exigencias técnicas durante la ejecución de la obra.";

/// Renders the report and joins the pages with [`PAGE_BREAK`].
#[must_use]
pub fn render_text(report: &Report) -> String {
    render_pages(report).join(PAGE_BREAK)
}

#[must_use]
pub fn render_pages(report: &Report) -> Vec<String> {
    paginate(report, PAGE_LINES)
}

pub fn export_text<P: AsRef<Path>>(report: &Report, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(render_text(report).as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

/// Lays blocks out top to bottom, starting a new page whenever the next
/// block would overflow the current one. A block taller than a page gets a
/// page of its own.
fn paginate(report: &Report, page_lines: usize) -> Vec<String> {
    let mut pages: Vec<Vec<String>> = vec![Vec::new()];

    let mut blocks = vec![header_lines(report)];
    blocks.extend(report.sections.iter().map(section_lines));
    blocks.push(totals_lines(report));

    for block in blocks {
        let needs_break = pages
            .last()
            .is_some_and(|page| !page.is_empty() && page.len() + block.len() > page_lines);
        if needs_break {
            pages.push(Vec::new());
        }
        if let Some(page) = pages.last_mut() {
            page.extend(block);
        }
    }

    pages
        .into_iter()
        .map(|lines| {
            let mut page = lines.join("\n");
            page.push('\n');
            page
        })
        .collect()
}

fn header_lines(report: &Report) -> Vec<String> {
    let house = &report.house;
    let vat = if report.include_vat { "Con" } else { "Sin" };
    vec![
        "INFORME DE SUPERFICIES".to_string(),
        house.name.clone(),
        String::new(),
        format!(
            "Identificador: {}   Tipología: {}   Orientación: {}",
            house.id, house.house_type, house.orientation
        ),
        format!("Precio ({vat} IVA): {}", report.formatted_price),
        format!(
            "Parcela Aprox: {} m²   Sup. Total (Const+Ext): {} m²",
            house.parcel_area, house.declared_total_area
        ),
        format!("Superficies: {}", mode_heading(report.display_mode)),
        String::new(),
    ]
}

fn mode_heading(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Useful => "útiles",
        DisplayMode::Constructed => "construidas",
    }
}

fn section_lines(section: &FloorSection) -> Vec<String> {
    let rule = "-".repeat(LABEL_WIDTH + AREA_WIDTH);
    let mut lines = vec![
        section.floor.label().to_uppercase(),
        rule,
        table_line("Estancia", "Superficie"),
    ];
    lines.extend(
        section
            .rows
            .iter()
            .map(|row| table_line(&row.label, &format_area(row.area))),
    );
    lines.push(String::new());
    lines
}

fn totals_lines(report: &Report) -> Vec<String> {
    let totals = &report.totals;
    vec![
        "RESUMEN".to_string(),
        "-".repeat(LABEL_WIDTH + AREA_WIDTH),
        format!(
            "{}  ({:.2} %)",
            table_line("Total interior", &format_area(totals.interior)),
            totals.pct_interior
        ),
        format!(
            "{}  ({:.2} %)",
            table_line("Zonas exteriores", &format_area(totals.exterior)),
            totals.pct_exterior
        ),
        table_line("Total", &format_area(totals.total)),
        String::new(),
        DISCLAIMER.to_string(),
    ]
}

fn table_line(label: &str, value: &str) -> String {
    format!("{label:<LABEL_WIDTH$}{value:>AREA_WIDTH$}")
}

fn format_area(area: f64) -> String {
    format!("{area:.2} m²")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_development;
    use crate::report::build_report;

    fn v16_report(mode: DisplayMode) -> Report {
        let development = builtin_development();
        build_report(development.house("V16").unwrap(), false, mode).unwrap()
    }

    #[test]
    fn test_text_lists_every_floor_in_order() {
        let text = render_text(&v16_report(DisplayMode::Useful));
        let positions: Vec<usize> = ["SÓTANO", "PLANTA BAJA", "PLANTA PRIMERA", "PLANTA CUBIERTA"]
            .iter()
            .map(|title| text.find(title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Precio (Sin IVA): 260.000 €"));
        assert!(text.contains("91.55 m²"));
    }

    #[test]
    fn test_small_pages_break_between_blocks() {
        let report = v16_report(DisplayMode::Constructed);
        let pages = paginate(&report, 20);

        assert!(pages.len() > 1);
        assert!(pages[0].starts_with("INFORME DE SUPERFICIES"));
        for page in &pages {
            assert!(page.lines().count() <= 20);
        }
        assert!(pages.last().unwrap().contains("RESUMEN"));
    }

    #[test]
    fn test_default_page_holds_whole_report() {
        let pages = render_pages(&v16_report(DisplayMode::Useful));
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_summary_caption_matches_mode() {
        let text = render_text(&v16_report(DisplayMode::Constructed));
        assert!(text.contains("TOTAL CONSTRUIDA INTERIOR"));
        assert!(!text.contains("TOTAL ÚTIL"));
    }
}
