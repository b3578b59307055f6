//! Fetch orchestration services for the application layer.

pub mod analytics_service;
pub mod statistics_service;

pub use analytics_service::AnalyticsService;
pub use statistics_service::StatisticsService;
