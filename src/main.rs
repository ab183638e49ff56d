use clap::Parser;
use color_eyre::eyre::{bail, eyre, WrapErr};
use color_eyre::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use floorplan_inspector::area::DisplayMode;
use floorplan_inspector::data::{
    builtin_development, load_development, log_data_quality, Calibration,
};
use floorplan_inspector::export::{export_report, render_text, ExportFormat};
use floorplan_inspector::model::House;
use floorplan_inspector::report::build_report;
use floorplan_inspector::session::Session;
use floorplan_inspector::ui::App;

const DEFAULT_LOG_FILTER: &str = "floorplan_inspector=info";

#[derive(Parser, Debug)]
#[command(name = "floorplan-inspector")]
#[command(about = "Floorplan Inspector - browse house areas and export area reports")]
#[command(version)]
struct Args {
    /// Load houses from a JSON file instead of the built-in catalogue
    #[arg(long, value_name = "FILE")]
    houses: Option<PathBuf>,

    /// Marker calibration file (also where interactive calibration is saved)
    #[arg(long, value_name = "FILE")]
    calibration: Option<PathBuf>,

    /// House to open or export
    #[arg(long, value_name = "ID", default_value = "V3")]
    house: String,

    /// Show constructed instead of useful areas
    #[arg(long)]
    constructed: bool,

    /// Include VAT in the price
    #[arg(long)]
    vat: bool,

    /// Export the report to JSON
    #[arg(long)]
    json: bool,

    /// Export the report to CSV
    #[arg(long)]
    csv: bool,

    /// Export the report to paginated text
    #[arg(long)]
    text: bool,

    /// Export or print every house instead of only --house
    #[arg(long)]
    all: bool,

    /// Directory exported reports are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Print the text report to stdout
    #[arg(long)]
    print: bool,

    /// List data-quality findings and exit
    #[arg(long)]
    check: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn formats(&self) -> Vec<ExportFormat> {
        [
            (self.json, ExportFormat::Json),
            (self.csv, ExportFormat::Csv),
            (self.text, ExportFormat::Text),
        ]
        .into_iter()
        .filter_map(|(wanted, format)| wanted.then_some(format))
        .collect()
    }

    fn is_interactive(&self) -> bool {
        !(self.json || self.csv || self.text || self.print || self.check)
    }

    fn display_mode(&self) -> DisplayMode {
        if self.constructed {
            DisplayMode::Constructed
        } else {
            DisplayMode::Useful
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    init_tracing(args.log_file.as_deref(), args.is_interactive())?;

    let mut development = match &args.houses {
        Some(path) => load_development(path)?,
        None => builtin_development(),
    };
    if development.houses.is_empty() {
        bail!("development '{}' has no houses", development.name);
    }
    log_data_quality(&development);

    let calibration = match &args.calibration {
        Some(path) => Calibration::load(path)?,
        None => Calibration::new(),
    };
    calibration.apply(&mut development);

    if args.check {
        let warnings = development.data_quality_warnings();
        for warning in &warnings {
            println!("{warning}");
        }
        println!("{} finding(s)", warnings.len());
        return Ok(());
    }

    if !args.is_interactive() {
        let houses: Vec<&House> = if args.all {
            development.houses.iter().collect()
        } else {
            vec![development
                .house(&args.house)
                .ok_or_else(|| eyre!("unknown house '{}'", args.house))?]
        };

        let formats = args.formats();
        if !formats.is_empty() {
            std::fs::create_dir_all(&args.out_dir).wrap_err_with(|| {
                format!("cannot create output directory {}", args.out_dir.display())
            })?;
        }

        for house in houses {
            let report = build_report(house, args.vat, args.display_mode())?;
            if args.print {
                print!("{}", render_text(&report));
            }
            for &format in &formats {
                let path = export_report(&report, &args.out_dir, format)?;
                println!("Exported {format} report: {}", path.display());
            }
        }
        return Ok(());
    }

    let session = Session::new(args.house.clone())
        .with_display_mode(args.display_mode())
        .with_vat(args.vat);
    let app = App::new(development, session)
        .with_calibration(calibration, args.calibration.clone())
        .with_out_dir(args.out_dir.clone());

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// The terminal UI owns the screen, so interactive runs only log when a log
/// file is given.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}
