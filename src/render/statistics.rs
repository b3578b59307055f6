//! Terminal composition of the statistics screen.

use colored::*;

use crate::domain::entities::{BreakdownEntry, StatisticsSummary};

use super::badges;
use super::bars::NO_DATA_PLACEHOLDER;
use super::summary::format_date;
use super::table::format_rate;

/// Prints the full statistics screen.
pub fn print_statistics(stats: &StatisticsSummary, activity_limit: usize) {
    println!("{}", "📈 Dashboard Statistics".bright_blue().bold());
    println!();

    // Key metrics
    metric_card(
        "Total Users",
        stats.users.total,
        &format!("{} new this month", stats.users.new_this_month),
    );
    metric_card(
        "Total Therapists",
        stats.therapists.total,
        &format!("{} active", stats.therapists.active),
    );
    metric_card(
        "Total Appointments",
        stats.appointments.total,
        &format!("{} this month", stats.appointments.this_month),
    );
    metric_card(
        "Chat Messages",
        stats.chat.total_messages,
        &format!("{} this month", stats.chat.messages_this_month),
    );
    println!();

    section("Appointment Status Breakdown");
    print_breakdown(
        &stats.appointments.status_breakdown,
        stats.appointments.total,
        badges::status_color,
    );

    section("Session Type Breakdown");
    print_breakdown(
        &stats.appointments.session_type_breakdown,
        stats.appointments.total,
        badges::session_type_color,
    );

    section("Top Performing Therapists");
    if stats.therapists.top_performers.is_empty() {
        println!("  {}", NO_DATA_PLACEHOLDER.yellow());
    } else {
        println!(
            "  {:<24} {:<20} {:>6} {:>10} {:>8}",
            "Therapist", "Specialization", "Total", "Completed", "Rate"
        );
        println!("  {}", "─".repeat(72).bright_black());
        for therapist in &stats.therapists.top_performers {
            println!(
                "  {:<24} {:<20} {:>6} {:>10} {:>8}",
                therapist.therapist_name.cyan(),
                therapist.specialization.joined(),
                therapist.total_appointments,
                therapist.completed_appointments,
                format_rate(therapist.completion_rate).green()
            );
        }
    }
    println!();

    section("Email Reminder Statistics");
    println!(
        "  24h: {}   1h: {}   15min: {}",
        stats.reminders.total_24h.to_string().bright_blue().bold(),
        stats.reminders.total_1h.to_string().bright_yellow().bold(),
        stats.reminders.total_15min.to_string().bright_red().bold()
    );
    println!();

    section("Recent Appointments");
    if stats.recent_activity.appointments.is_empty() {
        println!("  {}", NO_DATA_PLACEHOLDER.yellow());
    }
    for appt in stats.recent_activity.appointments.iter().take(activity_limit) {
        println!(
            "  {} with {}   {:<12} {}",
            appt.user_name().cyan(),
            appt.therapist_name().cyan(),
            appt.status.color(badges::status_color(&appt.status)),
            format_date(appt.start_date()).bright_black()
        );
    }
    println!();

    section("Recent Users");
    if stats.recent_activity.users.is_empty() {
        println!("  {}", NO_DATA_PLACEHOLDER.yellow());
    }
    for user in stats.recent_activity.users.iter().take(activity_limit) {
        println!(
            "  {:<24} {:<32} {}",
            user.name.cyan(),
            user.email.bright_black(),
            format_date(user.created_date()).bright_black()
        );
    }
    println!();

    section("System Health");
    println!(
        "  Database:           {}",
        stats.system_health.database_connections.bright_white()
    );
    println!(
        "  Reminder scheduler: {} jobs active",
        stats
            .system_health
            .active_jobs()
            .to_string()
            .bright_white()
    );
    println!(
        "  Email service:      {}",
        stats.system_health.email_service.bright_white()
    );
    println!(
        "  Last backup:        {}",
        format_date(stats.system_health.last_backup_date()).bright_white()
    );
    println!();
}

fn section(title: &str) {
    println!("{}", title.bright_white().bold());
}

fn metric_card(title: &str, value: u64, subtitle: &str) {
    println!(
        "  {:<20} {:>8}   {}",
        title,
        value.to_string().bright_green().bold(),
        subtitle.bright_black()
    );
}

/// Prints one categorical breakdown with color badges and percentage shares.
fn print_breakdown(
    entries: &[BreakdownEntry],
    total: u64,
    color_for: impl Fn(&str) -> Color,
) {
    if entries.is_empty() {
        println!("  {}", NO_DATA_PLACEHOLDER.yellow());
        println!();
        return;
    }

    for entry in entries {
        println!(
            "  {:<20} {:>5.1}%",
            badges::badge_text(&entry.key, entry.count).color(color_for(&entry.key)),
            badges::share_percent(entry.count, total)
        );
    }
    println!();
}
