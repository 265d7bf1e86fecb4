//! Main application state and TUI event loop for tg-chart.
//!
//! [`App`] owns the theme and drives the chart event loop: draw the grouped
//! bar chart, poll the keyboard, exit on `q` / `Q` / `Ctrl+C`.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::chart_view::{self, YearSeriesData};
use crate::themes::Theme;

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the tg-chart TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Construct a new application with the given theme name.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            should_quit: false,
        }
    }

    /// Show the chart for the given per-year series, then wait for `q` /
    /// `Ctrl+C`. `max_count` is the largest monthly count and fixes the
    /// y-axis scale.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// the loop stays responsive to terminal resize events without spinning.
    pub async fn run_chart(self, series: Vec<YearSeriesData>, max_count: u64) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                if series.is_empty() {
                    chart_view::render_no_data(frame, area, &self.theme);
                } else {
                    chart_view::render_chart_view(frame, area, &series, max_count, &self.theme);
                }
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        _ => {}
                    }
                }
            }
        }

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
