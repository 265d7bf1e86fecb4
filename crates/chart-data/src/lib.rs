//! Data extraction layer for tg-chart.
//!
//! Responsible for discovering the numbered `messages{N}.html` documents of a
//! Telegram export, scanning their entries into a [`chart_core::ScanState`],
//! and shaping the result into per-year monthly series for the chart.

pub mod extractor;
pub mod reader;
pub mod series;

pub use chart_core as core;
