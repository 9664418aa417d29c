//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the application,
//! including environment variable loading and default values.

pub mod gateway;
pub mod metrics;

pub use gateway::*;
pub use metrics::*;
