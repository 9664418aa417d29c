//! Data models forwarded between callers and the upstream services.

pub mod api;

pub use api::*;
