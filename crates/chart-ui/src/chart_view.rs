//! Grouped bar-chart view for tg-chart.
//!
//! Renders one bar group per month with one colored bar per year inside it,
//! a legend line keyed by year, and a bordered block around the whole chart.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use chart_core::models::MONTH_NAMES;

use crate::layout;
use crate::themes::Theme;

/// Data for one year's bars, in the order the years were first seen.
#[derive(Debug, Clone)]
pub struct YearSeriesData {
    /// Raw year token used for the legend entry.
    pub year: String,
    /// Message count per month, January first.
    pub counts: [u64; 12],
}

/// Render the monthly message chart into `area`.
///
/// Bar groups keep the caller's series order, so years appear in first-seen
/// order, and every year keeps one palette color across all twelve months.
/// `max_count` is the largest monthly count across all series and fixes the
/// y-axis scale.
pub fn render_chart_view(
    frame: &mut Frame,
    area: Rect,
    series: &[YearSeriesData],
    max_count: u64,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Telegram Messages ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    // One legend line on top, the chart in the rest.
    let legend_area = Rect::new(inner.x, inner.y, inner.width, 1);

    frame.render_widget(legend_line(series, theme), legend_area);

    let num_years = series.len();
    let bar_width = layout::bar_width_cells(inner.width, num_years);
    let group_gap = layout::group_gap_cells(inner.width, num_years, bar_width);

    // Inset by the leading margin so each month's group of bars is centered
    // on its slot rather than flush left.
    let leading = layout::group_leading_cells(inner.width, num_years);
    let chart_area = Rect::new(
        inner.x + leading,
        inner.y + 1,
        inner.width.saturating_sub(leading),
        inner.height - 1,
    );

    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(group_gap)
        .label_style(theme.axis);

    if max_count > 0 {
        chart = chart.max(max_count);
    }

    for (slot, month) in MONTH_NAMES.iter().enumerate() {
        let bars: Vec<Bar> = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Bar::default()
                    .value(s.counts[slot])
                    .style(theme.year_style(i))
                    .value_style(theme.value)
            })
            .collect();
        chart = chart.data(BarGroup::default().label(Line::from(*month)).bars(&bars));
    }

    frame.render_widget(chart, chart_area);
}

/// Build the legend line: a colored marker plus year token per series.
fn legend_line<'a>(series: &'a [YearSeriesData], theme: &Theme) -> Paragraph<'a> {
    let mut spans: Vec<Span> = vec![Span::styled("Messages per month  ", theme.bold)];
    for (i, s) in series.iter().enumerate() {
        spans.push(Span::styled("■ ", theme.year_style(i)));
        spans.push(Span::styled(s.year.as_str(), theme.text));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans))
}

/// Render a placeholder when the scan produced no dated messages.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No dated messages found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "The export contained no date separators to attribute messages to.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Telegram Messages "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
