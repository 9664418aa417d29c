//! Custom middleware implementations for the gateway.
//!
//! This module contains middleware for request IDs, access/error logging,
//! session authentication, and metrics collection. Applied to the `/thread`
//! scope outermost-first: request-ID, access log, error log, auth, metrics.

pub mod access_log;
pub mod auth;
pub mod error_log;
pub mod metrics;
pub mod request_id;

pub use access_log::*;
pub use auth::*;
pub use error_log::*;
pub use metrics::*;
pub use request_id::*;
