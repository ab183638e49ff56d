pub mod calibration;
pub mod catalogue;
pub mod loader;

pub use crate::error::LoadError;
pub use calibration::Calibration;
pub use catalogue::builtin_development;
pub use loader::load_development;

use crate::model::Development;
use tracing::{debug, warn};

/// Logs the data-quality findings of `development` and returns how many
/// there were. Findings never alter the data.
pub fn log_data_quality(development: &Development) -> usize {
    let warnings = development.data_quality_warnings();
    for warning in &warnings {
        debug!(%warning, "data quality");
    }
    if !warnings.is_empty() {
        warn!(
            findings = warnings.len(),
            "source tables contain inconsistencies; run with --check to list them"
        );
    }
    warnings.len()
}
