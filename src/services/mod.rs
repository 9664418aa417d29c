//! Service layer: metrics recorder, session validation, upstream clients.

pub mod comment;
pub mod metrics;
pub mod session;
pub mod thread;
pub(crate) mod upstream;

pub use comment::*;
pub use metrics::*;
pub use session::*;
pub use thread::*;
