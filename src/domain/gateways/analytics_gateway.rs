//! Gateway trait for the admin analytics API.

use crate::domain::entities::{
    AppointmentAnalytics, EngagementAnalytics, ReportingPeriod, StatisticsSummary,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only interface over the backend's admin analytics endpoints.
///
/// Each method maps to one HTTP GET and returns normalized domain entities;
/// decoding and field resolution happen inside the implementation so callers
/// never see raw backend records.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpAnalyticsGateway`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsGateway: Send + Sync {
    /// Fetches the appointment analytics for one reporting period.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the credential is rejected,
    /// [`AppError::Transport`] / [`AppError::Api`] on request failure, and
    /// [`AppError::Decode`] when the body is not the expected shape.
    async fn fetch_appointment_analytics(
        &self,
        period: ReportingPeriod,
    ) -> Result<AppointmentAnalytics, AppError>;

    /// Fetches the engagement analytics (not period-scoped).
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_appointment_analytics`].
    async fn fetch_engagement_analytics(&self) -> Result<EngagementAnalytics, AppError>;

    /// Fetches the platform-wide statistics summary.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_appointment_analytics`].
    async fn fetch_statistics(&self) -> Result<StatisticsSummary, AppError>;
}
