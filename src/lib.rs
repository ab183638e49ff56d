//! # Floorplan Inspector
//!
//! A terminal-based area inspector for the houses of a residential
//! development.
//!
//! ## Features
//!
//! - Load a development from JSON, or use the built-in catalogue
//! - Browse houses floor by floor in useful or constructed mode
//! - Tick rooms to get a running area total
//! - Report interior/exterior totals with percentages and the final price
//! - Export reports to JSON, CSV and paginated text
//!
//! ## Example
//!
//! ```
//! use floorplan_inspector::area::DisplayMode;
//! use floorplan_inspector::data::builtin_development;
//! use floorplan_inspector::report::build_report;
//!
//! let development = builtin_development();
//! let house = development.house("V3").unwrap();
//! let report = build_report(house, true, DisplayMode::Useful).unwrap();
//! assert_eq!(report.formatted_price, "256.300 €");
//! ```

pub mod area;
pub mod data;
pub mod error;
pub mod export;
pub mod model;
pub mod report;
pub mod session;
pub mod ui;
