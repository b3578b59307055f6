//! Terminal composition of the analytics screen.
//!
//! Pure layout over the normalized snapshot: charts, tables, activity lists,
//! and summary cards.

use colored::*;

use crate::domain::entities::AnalyticsSnapshot;

use super::bars::{self, NO_DATA_PLACEHOLDER};
use super::summary;
use super::table;

/// Prints the full analytics screen for one snapshot.
pub fn print_analytics(snapshot: &AnalyticsSnapshot, activity_limit: usize) {
    println!(
        "{} {}",
        "📊 Analytics & Trends".bright_blue().bold(),
        format!("({})", snapshot.period.label()).bright_black()
    );
    println!();

    // Appointment analytics
    section(&format!(
        "Daily Appointment Breakdown ({})",
        snapshot.period.as_query()
    ));
    print_chart(&snapshot.appointments.daily_breakdown, Color::Blue);

    section("Therapist Performance");
    print_table(&snapshot.appointments.therapist_performance);

    // Engagement analytics
    section("User Registration Trends (Last 6 Months)");
    print_chart(&snapshot.engagement.user_registration_trends, Color::Green);

    section("User Activity Statistics");
    println!(
        "  Active users: {}",
        snapshot
            .engagement
            .active_users
            .to_string()
            .bright_green()
            .bold()
    );
    println!();
    println!("  Most active users:");
    if snapshot.engagement.user_activity_stats.is_empty() {
        println!("  {}", NO_DATA_PLACEHOLDER.yellow());
    }
    for user in snapshot
        .engagement
        .user_activity_stats
        .iter()
        .take(activity_limit)
    {
        println!(
            "  {:<24} {:>4} appointments   last: {}",
            user.name.cyan(),
            user.appointment_count,
            summary::format_date(user.last_appointment).bright_black()
        );
    }

    section("Chat Engagement Statistics");
    print_table(&snapshot.engagement.chat_engagement);
    println!();
    card(
        "Total Messages",
        summary::total_messages(&snapshot.engagement.chat_engagement),
    );
    card(
        "Active Chat Users",
        summary::active_chat_users(&snapshot.engagement.chat_engagement) as u64,
    );

    // Summary cards
    section("Summary");
    card(
        &format!("Total Appointments (in {})", snapshot.period.as_query()),
        snapshot.appointments.total_appointments,
    );
    card("Active Users", snapshot.engagement.active_users);
    card(
        "Chat Sessions",
        summary::total_chat_sessions(&snapshot.engagement.chat_engagement),
    );
    println!();
}

fn section(title: &str) {
    println!("{}", title.bright_white().bold());
}

fn print_chart(series: &[crate::domain::entities::AggregateBucket], color: Color) {
    if series.is_empty() {
        println!("  {}", NO_DATA_PLACEHOLDER.yellow());
        println!();
        return;
    }

    for row in bars::chart_rows(series) {
        println!(
            "  {:<12} {} {:>6}",
            row.label,
            row.bar.color(color),
            row.count.to_string().bright_white()
        );
    }
    println!();
}

fn print_table(rows: &[crate::domain::entities::PerformanceRow]) {
    for line in table::table_lines(rows) {
        println!("{line}");
    }
    println!();
}

fn card(title: &str, value: u64) {
    println!(
        "  {:<32} {}",
        title,
        value.to_string().bright_green().bold()
    );
}
