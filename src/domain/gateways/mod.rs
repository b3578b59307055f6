//! Gateway trait definitions for the domain layer.
//!
//! The console is a pure read-only client: its only collaborators are the
//! admin API and the credential source, and both are abstracted behind traits
//! here so the fetch orchestration can be tested without a network.
//!
//! # Architecture
//!
//! - Traits define the contract for remote reads
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Gateways
//!
//! - [`AnalyticsGateway`] - Admin analytics and statistics endpoints
//! - [`CredentialProvider`] - Bearer credential lookup

pub mod analytics_gateway;
pub mod credentials;

pub use analytics_gateway::AnalyticsGateway;
pub use credentials::CredentialProvider;

#[cfg(test)]
pub use analytics_gateway::MockAnalyticsGateway;
#[cfg(test)]
pub use credentials::MockCredentialProvider;
