//! Gateway error types and their HTTP mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Errors surfaced by the upstream clients.
///
/// Handlers propagate these unchanged; the `ResponseError` impl turns them
/// into generic failures without forwarding any upstream error detail.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The upstream could not be reached or the call timed out
    #[error("failed to reach {service}: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-200 status
    #[error("{service} returned status {status}")]
    UpstreamStatus { service: &'static str, status: u16 },

    /// The upstream answered 200 but the body did not decode
    #[error("failed to decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// An outbound URL could not be constructed from configuration
    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Transport { .. }
            | GatewayError::UpstreamStatus { .. }
            | GatewayError::Decode { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    // Empty body: upstream failure detail stays in the logs, not the response
    fn error_response(&self) -> HttpResponse {
        HttpResponse::new(self.status_code())
    }
}
