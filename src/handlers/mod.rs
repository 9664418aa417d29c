//! HTTP request handlers for the gateway endpoints.

pub mod comment;
pub mod metrics;
pub mod thread;

pub use comment::*;
pub use metrics::*;
pub use thread::*;
