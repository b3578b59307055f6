//! Platform-wide statistics payload for the statistics screen.
//!
//! Unlike the analytics aggregates, this payload has a stable schema, so it is
//! deserialized directly into typed structs. Every field carries a default:
//! a missing or null section renders as zeros and empty lists rather than
//! failing the fetch cycle. Timestamps arrive as strings and are parsed
//! leniently at read time, so a malformed date degrades to an absent one
//! instead of discarding the payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// User head counts.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total: u64,
    pub new_this_month: u64,
}

/// Therapist head counts and the top-performers table.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TherapistStats {
    pub total: u64,
    pub active: u64,
    pub top_performers: Vec<TopTherapist>,
}

/// One row of the top-performing-therapists table.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopTherapist {
    pub therapist_name: String,
    pub specialization: Specialization,
    pub total_appointments: u64,
    pub completed_appointments: u64,
    pub completion_rate: Option<f64>,
}

/// Therapist specialization: a single value or a list, depending on source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Specialization {
    Many(Vec<String>),
    One(String),
}

impl Specialization {
    /// Joined display form: lists become `"a, b"`, single values pass through.
    pub fn joined(&self) -> String {
        match self {
            Self::Many(items) => items.join(", "),
            Self::One(value) => value.clone(),
        }
    }
}

impl Default for Specialization {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// Appointment totals plus the status and session-type breakdowns.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentStats {
    pub total: u64,
    pub this_month: u64,
    pub status_breakdown: Vec<BreakdownEntry>,
    pub session_type_breakdown: Vec<BreakdownEntry>,
}

/// One `{ _id, count }` grouping in a categorical breakdown.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BreakdownEntry {
    #[serde(rename = "_id")]
    pub key: String,
    pub count: u64,
}

/// Chat message counters.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatStats {
    pub total_messages: u64,
    pub messages_this_month: u64,
}

/// Email reminder counters per lead time.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ReminderStats {
    #[serde(rename = "total24h")]
    pub total_24h: u64,
    #[serde(rename = "total1h")]
    pub total_1h: u64,
    #[serde(rename = "total15min")]
    pub total_15min: u64,
}

/// Operational health fields reported by the backend.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemHealth {
    pub database_connections: String,
    /// Scheduler job map; only its size (active job count) is displayed.
    pub reminder_scheduler: BTreeMap<String, Value>,
    pub email_service: String,
    /// Raw timestamp string; see [`SystemHealth::last_backup_date`].
    pub last_backup: Option<String>,
}

impl SystemHealth {
    /// Number of active reminder-scheduler jobs.
    pub fn active_jobs(&self) -> usize {
        self.reminder_scheduler.len()
    }

    /// Parses the last-backup timestamp, tolerating malformed values.
    pub fn last_backup_date(&self) -> Option<DateTime<Utc>> {
        parse_lenient_date(self.last_backup.as_deref())
    }
}

/// Reference to a named entity inside a recent-activity row.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    pub name: String,
}

/// One row of the recent-appointments list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentAppointment {
    #[serde(rename = "userId")]
    pub user: Option<NamedRef>,
    #[serde(rename = "therapistId")]
    pub therapist: Option<NamedRef>,
    pub status: String,
    pub start_date_time: Option<String>,
}

impl RecentAppointment {
    /// User display name, falling back to a generic placeholder.
    pub fn user_name(&self) -> &str {
        match &self.user {
            Some(user) if !user.name.is_empty() => &user.name,
            _ => "User",
        }
    }

    /// Therapist display name, falling back to a generic placeholder.
    pub fn therapist_name(&self) -> &str {
        match &self.therapist {
            Some(therapist) if !therapist.name.is_empty() => &therapist.name,
            _ => "Therapist",
        }
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        parse_lenient_date(self.start_date_time.as_deref())
    }
}

/// One row of the recent-users list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentUser {
    pub name: String,
    pub email: String,
    pub created_at: Option<String>,
}

impl RecentUser {
    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        parse_lenient_date(self.created_at.as_deref())
    }
}

/// Bounded recent-activity lists (capped for display at render time).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RecentActivity {
    pub appointments: Vec<RecentAppointment>,
    pub users: Vec<RecentUser>,
}

/// The full statistics-screen payload.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsSummary {
    pub users: UserStats,
    pub therapists: TherapistStats,
    pub appointments: AppointmentStats,
    pub chat: ChatStats,
    pub reminders: ReminderStats,
    pub system_health: SystemHealth,
    pub recent_activity: RecentActivity,
}

/// Parses an RFC 3339 timestamp, returning `None` for absent or malformed input.
fn parse_lenient_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
