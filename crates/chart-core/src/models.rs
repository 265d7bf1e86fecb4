//! Core data model for the export scan.
//!
//! The scan walks every message element of every export document in order and
//! folds it into a [`ScanState`]: a count per month+year key, the distinct
//! year tokens in first-seen order, and the date context currently in effect.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Full English month names, calendar order. These double as the chart's
/// x-axis labels and must match the month spelling used in the export's date
/// separators, since keys are built by string concatenation.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Build the aggregation key for a month name and a raw year token.
///
/// The two are concatenated with no separator (`"January2023"`). The year
/// token is used exactly as scanned: `"2023"` and `"23"` produce distinct
/// keys.
pub fn month_year_key(month: &str, year: &str) -> String {
    format!("{}{}", month, year)
}

/// Returns `true` when `token` contains a plausible 4-digit year (1000–3999).
///
/// The match is unanchored, so `"2023,"` and `"(1999)"` pass.
pub fn is_year_token(token: &str) -> bool {
    static YEAR_RE: OnceLock<Regex> = OnceLock::new();
    let re = YEAR_RE.get_or_init(|| Regex::new(r"[1-3][0-9]{3}").expect("regex is valid"));
    re.is_match(token)
}

// ── ScanState ─────────────────────────────────────────────────────────────────

/// Accumulator threaded through the export scan.
///
/// Owns the three pieces of mutable scan state so nothing lives in globals:
/// the per-key message counts, the ordered year list, and the date context
/// set by the most recent valid date separator.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    /// Message count per month+year key. Entries are created at 1 on first
    /// sight and only ever incremented.
    pub counts: HashMap<String, u64>,
    /// Distinct year tokens in first-seen order. Never sorted; bar groups
    /// render in this order.
    pub years: Vec<String>,
    /// Key applied to subsequent messages, empty until the first valid date
    /// separator is seen. Carries over across document boundaries.
    pub current_key: String,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one date-separator text line into the state.
    ///
    /// `text` is expected to look like `"<weekday> <Month> <Year>"`. Lines
    /// with fewer than three space-separated tokens are pinned/system notices
    /// rather than date separators and leave the state untouched, as does a
    /// third token with no plausible year in it.
    pub fn record_date_text(&mut self, text: &str) {
        let tokens: Vec<&str> = text.split(' ').collect();
        if !text.contains(' ') || tokens.len() < 3 {
            return;
        }

        let year = tokens[2];
        if !is_year_token(year) {
            return;
        }

        self.current_key = month_year_key(tokens[1], year);
        if !self.years.iter().any(|y| y == year) {
            self.years.push(year.to_string());
        }
    }

    /// Count one ordinary chat message against the current date context.
    ///
    /// Messages seen before any valid date separator accumulate under the
    /// empty key; no month name ever matches that key, so they are never
    /// rendered.
    pub fn record_message(&mut self) {
        *self.counts.entry(self.current_key.clone()).or_insert(0) += 1;
    }

    /// Total messages counted, orphans included.
    pub fn total_messages(&self) -> u64 {
        self.counts.values().sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
