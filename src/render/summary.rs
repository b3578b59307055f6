//! Client-side derived totals and small display helpers.
//!
//! A few displayed numbers are not returned by the backend but computed here
//! by reducing the chat-engagement rows. Reductions start from zero, so a
//! missing or empty list yields 0, never an error — these values back summary
//! cards that must always render.

use chrono::{DateTime, Utc};

use crate::domain::entities::PerformanceRow;

/// Total chat messages across all engagement rows.
///
/// The message count is the row's secondary metric (resolved from
/// `totalMessages`).
pub fn total_messages(rows: &[PerformanceRow]) -> u64 {
    rows.iter().map(|row| row.secondary).sum()
}

/// Total chat sessions across all engagement rows.
///
/// The session count is the row's primary metric (resolved from
/// `chatSessions`).
pub fn total_chat_sessions(rows: &[PerformanceRow]) -> u64 {
    rows.iter().map(|row| row.primary).sum()
}

/// Number of users appearing in the engagement table.
pub fn active_chat_users(rows: &[PerformanceRow]) -> usize {
    rows.len()
}

/// Formats an optional timestamp as a date, `"N/A"` when absent.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "N/A".to_string(),
    }
}
