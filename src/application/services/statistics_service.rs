//! Fetch orchestration for the statistics screen.

use std::sync::Arc;

use crate::application::view::CycleCounter;
use crate::domain::entities::StatisticsSummary;
use crate::domain::gateways::AnalyticsGateway;
use crate::error::AppError;

/// Service driving the platform-wide statistics screen.
///
/// The screen is backed by a single request, but it follows the same fetch
/// cycle discipline as the analytics screen: loading → ready/error, a retry
/// action that re-runs the identical cycle, and cycle tokens so an overlapping
/// refresh cannot apply out of order.
pub struct StatisticsService<G: AnalyticsGateway> {
    gateway: Arc<G>,
    cycles: CycleCounter,
}

impl<G: AnalyticsGateway> StatisticsService<G> {
    /// Creates a new statistics service.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            cycles: CycleCounter::new(),
        }
    }

    /// Starts a new fetch cycle and returns its token.
    pub fn begin_cycle(&self) -> u64 {
        self.cycles.begin()
    }

    /// Runs one fetch cycle.
    ///
    /// # Errors
    ///
    /// Propagates the gateway error after logging it at the cycle boundary.
    pub async fn fetch_summary(&self) -> Result<StatisticsSummary, AppError> {
        self.gateway
            .fetch_statistics()
            .await
            .inspect_err(|e| tracing::error!("statistics fetch cycle failed: {e}"))
    }
}
