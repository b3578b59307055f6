//! # Therapy Admin Console
//!
//! A terminal analytics console for the therapy platform's admin API, built
//! with Tokio and reqwest.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Display entities, gateway traits, and the
//!   field resolver for heterogeneous aggregate records
//! - **Application Layer** ([`application`]) - Fetch-cycle orchestration and
//!   per-screen view state
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest gateway and
//!   credential provider
//! - **Render Layer** ([`render`]) - Deterministic text rendering: bars,
//!   tables, badges, and summary cards
//!
//! ## Features
//!
//! - Two independent dashboard screens (analytics and statistics)
//! - Concurrent all-or-nothing fetch cycles with a retry action
//! - Cycle tokens so an overlapping refresh can never apply out of order
//! - Lenient multi-schema field resolution with explicit candidate tables
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export ADMIN_TOKEN="..."
//! export API_BASE_URL="http://localhost:5000/api"  # Optional
//!
//! # Render the analytics screen
//! cargo run -- analytics --period month
//! ```
//!
//! ## Configuration
//!
//! Console configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsService, StatisticsService};
    pub use crate::application::view::{ViewPhase, ViewState};
    pub use crate::domain::entities::{
        AggregateBucket, AnalyticsSnapshot, PerformanceRow, ReportingPeriod, StatisticsSummary,
    };
    pub use crate::domain::gateways::{AnalyticsGateway, CredentialProvider};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpAnalyticsGateway;
    pub use crate::infrastructure::StaticCredentials;
}
