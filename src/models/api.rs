//! Thread and comment models.
//!
//! The gateway does not interpret these values; besides the identifiers used
//! for routing, every field is carried verbatim to and from the upstream
//! services through the flattened payload map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A discussion thread, owned entirely by the upstream thread service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Opaque fields forwarded verbatim
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// A comment under a thread, owned by the upstream comment service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Identifier of the owning thread, stamped from the URL path
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thread_id: String,

    /// Opaque fields forwarded verbatim
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}
