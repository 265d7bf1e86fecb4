//! Terminal UI layer for tg-chart.
//!
//! Provides themes with a per-year color palette, the bar-geometry layout
//! math, the grouped bar-chart view, and the application event loop built on
//! top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod layout;
pub mod themes;

pub use chart_core as core;
