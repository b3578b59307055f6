//! Core domain entities representing the dashboard data model.
//!
//! All entities are transient: they are built fresh on each fetch cycle, held
//! in view state for the lifetime of one screen, and replaced wholesale on the
//! next fetch or period change. Nothing here persists or caches.
//!
//! # Entity Types
//!
//! - [`AnalyticsSnapshot`] - Result of one analytics fetch cycle
//! - [`AggregateBucket`] - One grouped count in a breakdown series
//! - [`PerformanceRow`] - One entity's activity summary
//! - [`StatisticsSummary`] - The full statistics-screen payload
//! - [`ReportingPeriod`] - Aggregation window selector

pub mod analytics;
pub mod period;
pub mod statistics;

pub use analytics::{
    AggregateBucket, AnalyticsSnapshot, AppointmentAnalytics, EngagementAnalytics, PerformanceRow,
    UserActivity,
};
pub use period::ReportingPeriod;
pub use statistics::{
    AppointmentStats, BreakdownEntry, ChatStats, NamedRef, RecentActivity, RecentAppointment,
    RecentUser, ReminderStats, Specialization, StatisticsSummary, SystemHealth, TherapistStats,
    TopTherapist, UserStats,
};
