//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the admin API transport and the credential
//! source.
//!
//! # Modules
//!
//! - [`http`] - reqwest gateway over the admin analytics endpoints
//! - [`credentials`] - Configuration-backed credential provider

pub mod credentials;
pub mod http;

pub use credentials::StaticCredentials;
