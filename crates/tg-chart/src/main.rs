mod bootstrap;

use anyhow::Result;
use chart_core::settings::Settings;
use chart_data::reader::scan_export;
use chart_data::series::{build_year_series, max_monthly_count};
use chart_ui::app::App;
use chart_ui::chart_view::YearSeriesData;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("tg-chart v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Theme: {}, Max files: {}", settings.theme, settings.max_files);

    // Resolve the export directory: CLI/persisted value first, then the
    // well-known Telegram Desktop locations, then ask on stdin.
    let dir = match settings.dir {
        Some(ref d) if bootstrap::is_export_dir(d) => d.clone(),
        Some(ref d) => {
            tracing::warn!("No export found in {}; probing defaults", d.display());
            match bootstrap::discover_export_path() {
                Some(found) => found,
                None => bootstrap::prompt_for_directory()?,
            }
        }
        None => match bootstrap::discover_export_path() {
            Some(found) => found,
            None => bootstrap::prompt_for_directory()?,
        },
    };

    tracing::info!("Scanning export in {}", dir.display());
    let state = scan_export(&dir, settings.max_files)?;
    tracing::info!(
        "Counted {} messages across {} years",
        state.total_messages(),
        state.years.len()
    );

    let year_series = build_year_series(&state);
    let max_count = max_monthly_count(&year_series);

    // Convert YearSeries → YearSeriesData for the chart view.
    let series: Vec<YearSeriesData> = year_series
        .into_iter()
        .map(|s| YearSeriesData {
            year: s.year,
            counts: s.monthly_counts,
        })
        .collect();

    let app = App::new(&settings.theme);
    app.run_chart(series, max_count).await?;

    Ok(())
}
