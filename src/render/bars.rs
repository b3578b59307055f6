//! Proportional bar chart primitives.
//!
//! Widths are computed relative to the series maximum, never across series.
//! The math lives in pure functions so the invariants (100% for the maximum,
//! 0% for an all-zero series, nothing above 100%) are testable without a
//! terminal.

use crate::domain::entities::AggregateBucket;

/// Fixed placeholder shown instead of a chart for an empty series.
pub const NO_DATA_PLACEHOLDER: &str = "No data available";

/// Glyph width of a fully filled bar.
pub const BAR_WIDTH: usize = 30;

/// Label column width in chart rows.
const LABEL_WIDTH: usize = 12;

/// One renderable chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub bar: String,
    pub count: u64,
}

/// Largest count in the series (0 for an empty series).
pub fn max_count(series: &[AggregateBucket]) -> u64 {
    series.iter().map(|bucket| bucket.count).max().unwrap_or(0)
}

/// Bar width as a percentage of the series maximum.
///
/// An all-zero series would divide by zero; the guard renders every bar at 0%
/// instead of propagating NaN. `count <= max` holds by construction, so the
/// result never exceeds 100.
pub fn bar_width_percent(count: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }

    (count as f64 / max as f64) * 100.0
}

/// Renders a percentage as a fixed-width glyph bar.
pub fn bar_glyphs(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// Builds the rows of one chart, preserving series order.
///
/// Returns an empty vector for an empty series; callers render
/// [`NO_DATA_PLACEHOLDER`] instead.
pub fn chart_rows(series: &[AggregateBucket]) -> Vec<ChartRow> {
    let max = max_count(series);

    series
        .iter()
        .map(|bucket| ChartRow {
            label: bucket.label.clone(),
            bar: bar_glyphs(bar_width_percent(bucket.count, max), BAR_WIDTH),
            count: bucket.count,
        })
        .collect()
}

/// Plain-text chart lines, one per bucket.
pub fn chart_lines(series: &[AggregateBucket]) -> Vec<String> {
    if series.is_empty() {
        return vec![format!("  {NO_DATA_PLACEHOLDER}")];
    }

    chart_rows(series)
        .into_iter()
        .map(|row| {
            format!(
                "  {:<width$} {} {:>6}",
                row.label,
                row.bar,
                row.count,
                width = LABEL_WIDTH
            )
        })
        .collect()
}
