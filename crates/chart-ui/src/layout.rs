//! Bar-geometry math for the grouped chart.
//!
//! Geometry is computed in two steps: a fractional layout where each month
//! occupies a slot of width 1.0 on the x-axis (the same model the export
//! tool's original plotting used), then a mapping from fractions to terminal
//! cells based on the available chart width.

use tracing::warn;

/// Fractional bar width before any year is subtracted.
pub const BASE_BAR_WIDTH: f64 = 0.40;

/// Width given up per additional year sharing a month slot.
pub const WIDTH_STEP_PER_YEAR: f64 = 0.04;

/// Lower clamp once the formula goes non-positive.
pub const MIN_BAR_WIDTH: f64 = 0.04;

/// Fractional width of one bar when `num_years` bars share a month slot.
///
/// `0.40 − 0.04 × num_years`, so one year yields 0.36. The raw formula goes
/// non-positive at ten years; instead of rendering invisible bars the width
/// is clamped to [`MIN_BAR_WIDTH`] and a warning is emitted.
pub fn bar_width_fraction(num_years: usize) -> f64 {
    let raw = BASE_BAR_WIDTH - WIDTH_STEP_PER_YEAR * num_years as f64;
    if raw <= 0.0 {
        warn!(
            "Bar width formula is non-positive for {} years; clamping to {}",
            num_years, MIN_BAR_WIDTH
        );
        return MIN_BAR_WIDTH;
    }
    raw
}

/// Horizontal offset of year `index`'s bar from the month's center position.
///
/// `((1 − num_years)/2 + index) × width` centers the whole group of bars on
/// the month tick for both even and odd year counts.
pub fn bar_offset_fraction(num_years: usize, index: usize, width: f64) -> f64 {
    ((1.0 - num_years as f64) / 2.0 + index as f64) * width
}

/// Width of one bar in terminal cells, given the total chart width.
///
/// Each of the 12 months gets an equal slot; the fractional width maps into
/// that slot and is floored, but a bar never drops below one cell.
pub fn bar_width_cells(chart_width: u16, num_years: usize) -> u16 {
    let slot = f64::from(chart_width) / 12.0;
    let cells = (slot * bar_width_fraction(num_years)).floor() as u16;
    cells.max(1)
}

/// Gap between month groups in terminal cells.
///
/// Whatever the year bars don't use of the month slot becomes the group gap,
/// with a floor of one cell so adjacent months never merge visually.
pub fn group_gap_cells(chart_width: u16, num_years: usize, bar_width: u16) -> u16 {
    let slot = chart_width / 12;
    slot.saturating_sub(bar_width.saturating_mul(num_years as u16))
        .max(1)
}

/// Leading padding before the first month group, in terminal cells.
///
/// The first bar of a group sits at [`bar_offset_fraction`] of the slot from
/// the month tick; shifting the whole chart right by that margin centers each
/// group on its tick instead of leaving it flush left in the slot.
pub fn group_leading_cells(chart_width: u16, num_years: usize) -> u16 {
    let width = bar_width_fraction(num_years);
    let first = bar_offset_fraction(num_years, 0, width);
    // Distance from the slot's left edge to the first bar's left edge, as a
    // fraction of the slot (the tick sits at 0.5).
    let leading = (0.5 + first - width / 2.0).max(0.0);
    let slot = f64::from(chart_width) / 12.0;
    (slot * leading).floor() as u16
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ── bar_width_fraction ────────────────────────────────────────────────────

    #[test]
    fn test_width_single_year() {
        assert!((bar_width_fraction(1) - 0.36).abs() < EPS);
    }

    #[test]
    fn test_width_shrinks_per_year() {
        assert!((bar_width_fraction(2) - 0.32).abs() < EPS);
        assert!((bar_width_fraction(5) - 0.20).abs() < EPS);
        assert!((bar_width_fraction(9) - 0.04).abs() < EPS);
    }

    #[test]
    fn test_width_clamped_at_ten_years() {
        // The raw formula yields exactly 0.0 here; it must not be rendered.
        assert!((bar_width_fraction(10) - MIN_BAR_WIDTH).abs() < EPS);
        assert!((bar_width_fraction(25) - MIN_BAR_WIDTH).abs() < EPS);
    }

    #[test]
    fn test_width_never_non_positive() {
        for n in 0..50 {
            assert!(bar_width_fraction(n) > 0.0, "non-positive width at {}", n);
        }
    }

    // ── bar_offset_fraction ───────────────────────────────────────────────────

    #[test]
    fn test_offset_single_year_centered() {
        let w = bar_width_fraction(1);
        assert!(bar_offset_fraction(1, 0, w).abs() < EPS);
    }

    #[test]
    fn test_offset_two_years_symmetric() {
        let w = bar_width_fraction(2);
        let left = bar_offset_fraction(2, 0, w);
        let right = bar_offset_fraction(2, 1, w);
        assert!((left + right).abs() < EPS);
        assert!(left < right);
    }

    #[test]
    fn test_offset_three_years_middle_on_tick() {
        let w = bar_width_fraction(3);
        assert!(bar_offset_fraction(3, 1, w).abs() < EPS);
    }

    #[test]
    fn test_offsets_sum_to_zero() {
        // The group stays centered on the month tick for any year count.
        for n in 1..12 {
            let w = bar_width_fraction(n);
            let sum: f64 = (0..n).map(|i| bar_offset_fraction(n, i, w)).sum();
            assert!(sum.abs() < EPS, "offsets drift for {} years", n);
        }
    }

    #[test]
    fn test_offsets_spaced_by_width() {
        let w = bar_width_fraction(4);
        for i in 0..3 {
            let step = bar_offset_fraction(4, i + 1, w) - bar_offset_fraction(4, i, w);
            assert!((step - w).abs() < EPS);
        }
    }

    // ── Cell mapping ──────────────────────────────────────────────────────────

    #[test]
    fn test_bar_width_cells_wide_terminal() {
        // 120 cells / 12 months = 10-cell slots; 0.36 of that floors to 3.
        assert_eq!(bar_width_cells(120, 1), 3);
    }

    #[test]
    fn test_bar_width_cells_never_zero() {
        assert_eq!(bar_width_cells(12, 10), 1);
        assert_eq!(bar_width_cells(0, 1), 1);
    }

    #[test]
    fn test_group_gap_fills_slot_remainder() {
        // 10-cell slot, 2 years × 3 cells → 4 cells of gap.
        let bw = bar_width_cells(120, 2);
        assert_eq!(group_gap_cells(120, 2, bw), 10 - 2 * bw);
    }

    #[test]
    fn test_group_gap_never_zero() {
        assert_eq!(group_gap_cells(12, 10, 1), 1);
    }

    #[test]
    fn test_group_leading_centers_single_year() {
        // 10-cell slot, 0.36-wide bar: the bar's left edge sits at fraction
        // 0.5 - 0.18 = 0.32 of the slot, so 3 cells of leading padding.
        assert_eq!(group_leading_cells(120, 1), 3);
    }

    #[test]
    fn test_group_leading_two_years() {
        // First offset -0.16, half-width 0.16: leading fraction 0.18 → 1 cell.
        assert_eq!(group_leading_cells(120, 2), 1);
    }

    #[test]
    fn test_group_leading_never_negative() {
        // Past the clamp the group can span the whole slot; padding bottoms
        // out at zero instead of wrapping.
        assert_eq!(group_leading_cells(120, 30), 0);
    }

    #[test]
    fn test_group_leading_plus_bars_fit_in_slot() {
        for n in 1..8 {
            let bw = bar_width_cells(120, n);
            let leading = group_leading_cells(120, n);
            assert!(
                leading + bw * n as u16 <= 10,
                "group overflows its slot for {} years",
                n
            );
        }
    }
}
