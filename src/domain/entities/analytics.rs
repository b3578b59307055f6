//! Normalized entities for the analytics screen.
//!
//! These are the uniform display shapes produced by
//! [`crate::domain::normalize`] from heterogeneous backend aggregate records.
//! They carry no knowledge of the source key names.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::period::ReportingPeriod;

/// One grouped count in a breakdown series (e.g. appointments per day).
///
/// `count` values are only ever compared to other counts *within the same
/// series* when computing proportional bar widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateBucket {
    /// Resolved identifier: a date string, a `year-month` composite, or a
    /// categorical label. Empty when the source record had no identifier.
    pub label: String,
    pub count: u64,
}

impl AggregateBucket {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One entity's activity summary in a performance table.
///
/// Serves both therapist-performance rows (`totalAppointments` /
/// `completedAppointments`) and chat-engagement rows (`chatSessions` /
/// `totalMessages`); field resolution happens upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRow {
    /// Display name. Empty when neither name candidate was present.
    pub name: String,
    /// Total-count metric (appointments or chat sessions).
    pub primary: u64,
    /// Completed-count metric (completed appointments or messages).
    pub secondary: u64,
    /// Completion rate percentage. Rendered as `"N/A"` when absent.
    pub rate: Option<f64>,
}

/// One row of the most-active-users list.
///
/// Unlike the polymorphic aggregate records, this payload has a stable schema
/// and is deserialized directly.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActivity {
    pub name: String,
    pub appointment_count: u64,
    pub last_appointment: Option<DateTime<Utc>>,
}

/// Aggregates behind the appointment half of the analytics screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppointmentAnalytics {
    pub total_appointments: u64,
    pub daily_breakdown: Vec<AggregateBucket>,
    pub therapist_performance: Vec<PerformanceRow>,
}

/// Aggregates behind the engagement half of the analytics screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngagementAnalytics {
    pub active_users: u64,
    pub user_registration_trends: Vec<AggregateBucket>,
    pub user_activity_stats: Vec<UserActivity>,
    pub chat_engagement: Vec<PerformanceRow>,
}

/// Result of one successful analytics fetch cycle.
///
/// Both halves are always populated: a cycle where either request failed never
/// produces a snapshot (all-or-nothing join, see
/// [`crate::application::services::AnalyticsService`]).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub period: ReportingPeriod,
    pub appointments: AppointmentAnalytics,
    pub engagement: EngagementAnalytics,
}
