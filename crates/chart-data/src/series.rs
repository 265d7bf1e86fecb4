//! Shaping scan results into per-year monthly series.
//!
//! The chart wants, for every year, twelve counts in calendar order. Keys
//! that were never counted resolve to zero; keys that don't match any
//! month+year combination (the orphan key among them) are simply never
//! looked up.

use chart_core::models::{month_year_key, ScanState, MONTH_NAMES};

/// Twelve monthly counts for one year, calendar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSeries {
    /// Raw year token as scanned from the export.
    pub year: String,
    /// Message count per month, January first.
    pub monthly_counts: [u64; 12],
}

impl YearSeries {
    /// Sum of the twelve monthly counts.
    pub fn total(&self) -> u64 {
        self.monthly_counts.iter().sum()
    }
}

/// Build one series per scanned year, preserving first-seen year order.
pub fn build_year_series(state: &ScanState) -> Vec<YearSeries> {
    state
        .years
        .iter()
        .map(|year| {
            let mut monthly_counts = [0u64; 12];
            for (slot, month) in MONTH_NAMES.iter().enumerate() {
                if let Some(count) = state.counts.get(&month_year_key(month, year)) {
                    monthly_counts[slot] = *count;
                }
            }
            YearSeries {
                year: year.clone(),
                monthly_counts,
            }
        })
        .collect()
}

/// Largest single monthly count across all series, 0 when empty.
///
/// Used by the renderer to scale the y-axis.
pub fn max_monthly_count(series: &[YearSeries]) -> u64 {
    series
        .iter()
        .flat_map(|s| s.monthly_counts.iter().copied())
        .max()
        .unwrap_or(0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
