//! Wire payloads for the admin analytics endpoints.
//!
//! Aggregate rows arrive as raw JSON values because their key names vary by
//! data source; `into_domain` runs them through the field resolver. Scalar
//! fields are lenient: anything missing decodes to its default.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{
    AppointmentAnalytics, EngagementAnalytics, StatisticsSummary, UserActivity,
};
use crate::domain::normalize;

/// Body of `GET /admin/analytics/appointments`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentAnalyticsPayload {
    pub daily_breakdown: Vec<Value>,
    pub therapist_performance: Vec<Value>,
    pub total_appointments: u64,
}

impl AppointmentAnalyticsPayload {
    /// Normalizes the raw aggregate rows into display entities.
    pub fn into_domain(self) -> AppointmentAnalytics {
        AppointmentAnalytics {
            total_appointments: self.total_appointments,
            daily_breakdown: normalize::normalize_buckets(&self.daily_breakdown),
            therapist_performance: normalize::normalize_performance_rows(
                &self.therapist_performance,
            ),
        }
    }
}

/// Body of `GET /admin/analytics/engagement`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngagementAnalyticsPayload {
    pub user_registration_trends: Vec<Value>,
    pub active_users: u64,
    pub user_activity_stats: Vec<UserActivity>,
    pub chat_engagement: Vec<Value>,
}

impl EngagementAnalyticsPayload {
    pub fn into_domain(self) -> EngagementAnalytics {
        EngagementAnalytics {
            active_users: self.active_users,
            user_registration_trends: normalize::normalize_buckets(
                &self.user_registration_trends,
            ),
            user_activity_stats: self.user_activity_stats,
            chat_engagement: normalize::normalize_performance_rows(&self.chat_engagement),
        }
    }
}

/// Body of `GET /admin/statistics` — the summary is nested one level down.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatisticsEnvelope {
    pub statistics: StatisticsSummary,
}
