//! Thread Gateway - a thin HTTP gateway for a thread/comment backend
//!
//! This service exposes REST endpoints for threads and comments and forwards
//! every domain operation to remote upstream services over JSON/HTTP:
//! - Request-ID tagging, access and error logging
//! - Session authentication on all `/thread` routes
//! - Prometheus metrics for inbound requests and outbound upstream calls
//! - No local persistence, no business rules, no retries
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures forwarded to/from the upstream services
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Custom middleware for cross-cutting concerns
//! - `services/` - Upstream clients, session validation, metrics recorder
//! - `config/` - Configuration structures and environment loading

// Core modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{GatewayConfig, MetricsConfig, UpstreamConfig};
pub use error::GatewayError;
pub use handlers::{create_comment, create_thread, get_metrics, get_thread, like_comment};
pub use middleware::{
    AccessLog, ErrorLog, MetricsMiddleware, RequestId, RequestIdMiddleware, SessionAuth,
};
pub use models::{Comment, Thread};
pub use services::{
    AppMetrics, CommentClient, SessionError, SessionService, SessionValidator, ThreadClient,
    SESSION_HEADER,
};
