//! Application layer orchestrating fetch cycles.
//!
//! This layer coordinates gateway calls into all-or-nothing fetch cycles and
//! owns the per-screen view state machine. Services consume gateway traits and
//! provide a clean API for the CLI screens.
//!
//! # Modules
//!
//! - [`services`] - Per-screen fetch orchestration
//! - [`view`] - Loading/ready/error state with fetch-cycle tokens

pub mod services;
pub mod view;
