//! Performance table rendering.
//!
//! Rows are rendered in the order supplied by the backend — the table is a
//! straight pass-through mapping, not a ranking algorithm. One table shape
//! serves both therapist-performance and chat-engagement data; the field
//! resolver upstream already absorbed the schema difference.

use crate::domain::entities::PerformanceRow;

use super::bars::NO_DATA_PLACEHOLDER;

const NAME_WIDTH: usize = 24;
const COUNT_WIDTH: usize = 10;

/// Formats a completion rate cell.
///
/// Numeric rates render with exactly one decimal; an absent rate renders the
/// literal `"N/A"` (distinct from `0.0%`, which means a present zero).
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.1}%"),
        None => "N/A".to_string(),
    }
}

/// Plain-text table lines: header, separator, one line per row.
pub fn table_lines(rows: &[PerformanceRow]) -> Vec<String> {
    if rows.is_empty() {
        return vec![format!("  {NO_DATA_PLACEHOLDER}")];
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "  {:<NAME_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>8}",
        "Name", "Total", "Completed", "Rate"
    ));
    lines.push(format!("  {}", "─".repeat(NAME_WIDTH + COUNT_WIDTH * 2 + 11)));

    for row in rows {
        lines.push(format!(
            "  {:<NAME_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>8}",
            row.name,
            row.primary,
            row.secondary,
            format_rate(row.rate)
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, primary: u64, secondary: u64, rate: Option<f64>) -> PerformanceRow {
        PerformanceRow {
            name: name.to_string(),
            primary,
            secondary,
            rate,
        }
    }

    #[test]
    fn test_format_rate_one_decimal() {
        assert_eq!(format_rate(Some(87.456)), "87.5%");
        assert_eq!(format_rate(Some(100.0)), "100.0%");
        assert_eq!(format_rate(Some(0.0)), "0.0%");
    }

    #[test]
    fn test_format_rate_absent_is_na() {
        assert_eq!(format_rate(None), "N/A");
    }

    #[test]
    fn test_empty_table_renders_placeholder() {
        let lines = table_lines(&[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(NO_DATA_PLACEHOLDER));
    }

    #[test]
    fn test_rows_keep_backend_order() {
        // No client-side re-sorting: a lower total may come first.
        let rows = vec![
            row("Dr. Low", 2, 1, Some(50.0)),
            row("Dr. High", 90, 80, Some(88.9)),
        ];
        let lines = table_lines(&rows);
        assert!(lines[2].contains("Dr. Low"));
        assert!(lines[3].contains("Dr. High"));
    }

    #[test]
    fn test_row_cells() {
        let lines = table_lines(&[row("bob", 4, 120, None)]);
        let data_line = &lines[2];
        assert!(data_line.contains("bob"));
        assert!(data_line.contains("4"));
        assert!(data_line.contains("120"));
        assert!(data_line.ends_with("N/A"));
    }
}
