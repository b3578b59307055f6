//! Fetch orchestration for the analytics screen.

use std::sync::Arc;

use crate::application::view::CycleCounter;
use crate::domain::entities::{AnalyticsSnapshot, ReportingPeriod};
use crate::domain::gateways::AnalyticsGateway;
use crate::error::AppError;

/// Service driving the appointment/engagement analytics screen.
///
/// One fetch cycle issues both requests concurrently and assembles a snapshot
/// only after both settle. A single failing request abandons the whole cycle:
/// no partial snapshot is ever produced, and the retry action re-runs the
/// identical cycle with the same period.
pub struct AnalyticsService<G: AnalyticsGateway> {
    gateway: Arc<G>,
    cycles: CycleCounter,
}

impl<G: AnalyticsGateway> AnalyticsService<G> {
    /// Creates a new analytics service.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            cycles: CycleCounter::new(),
        }
    }

    /// Starts a new fetch cycle and returns its token.
    ///
    /// Called before [`Self::fetch_snapshot`]; the token is passed to
    /// [`crate::application::view::ViewState::apply`] so an overlapping,
    /// superseded cycle cannot overwrite newer data.
    pub fn begin_cycle(&self) -> u64 {
        self.cycles.begin()
    }

    /// Runs one full fetch cycle for the given period.
    ///
    /// Both requests run concurrently; assembly waits for both outcomes
    /// (all-or-nothing join, not a race).
    ///
    /// # Errors
    ///
    /// Returns the first sub-request error; the other request's result is
    /// discarded along with the cycle.
    pub async fn fetch_snapshot(
        &self,
        period: ReportingPeriod,
    ) -> Result<AnalyticsSnapshot, AppError> {
        let (appointments, engagement) = tokio::join!(
            self.gateway.fetch_appointment_analytics(period),
            self.gateway.fetch_engagement_analytics(),
        );

        let snapshot = AnalyticsSnapshot {
            period,
            appointments: appointments.inspect_err(log_cycle_failure)?,
            engagement: engagement.inspect_err(log_cycle_failure)?,
        };

        tracing::debug!(
            period = %period,
            buckets = snapshot.appointments.daily_breakdown.len(),
            "analytics fetch cycle complete"
        );

        Ok(snapshot)
    }
}

fn log_cycle_failure(e: &AppError) {
    tracing::error!("analytics fetch cycle failed: {e}");
}
