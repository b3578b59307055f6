//! Color-coded badges for categorical breakdowns.

use colored::Color;

/// Badge color for an appointment status.
pub fn status_color(status: &str) -> Color {
    match status {
        "completed" => Color::Green,
        "confirmed" => Color::Blue,
        "pending" => Color::Yellow,
        "cancelled" => Color::Red,
        _ => Color::White,
    }
}

/// Badge color for a session type.
pub fn session_type_color(session_type: &str) -> Color {
    match session_type {
        "video" => Color::Magenta,
        "audio" => Color::Blue,
        "chat" => Color::Green,
        _ => Color::White,
    }
}

/// Badge text: capitalized key with its count, e.g. `"Completed: 37"`.
pub fn badge_text(key: &str, count: u64) -> String {
    format!("{}: {}", capitalize(key), count)
}

/// A grouping's share of the total, as a percentage.
///
/// A zero total renders every share as 0.0% instead of dividing by zero.
pub fn share_percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    (count as f64 / total as f64) * 100.0
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
