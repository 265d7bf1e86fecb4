//! Shared types for tg-chart.
//!
//! Holds the error type, CLI settings with last-used persistence, the month
//! table and key construction, and the scan accumulator threaded through the
//! export scan.

pub mod error;
pub mod models;
pub mod settings;

pub use error::{ChartError, Result};
pub use models::{month_year_key, ScanState, MONTH_NAMES};
pub use settings::Settings;
