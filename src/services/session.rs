//! Session validation.
//!
//! The gateway holds no session state; it only checks that an opaque token is
//! present and well formed before letting a request through. The trait seam
//! exists so the real authenticator (an external collaborator) or a test spy
//! can be substituted.

use actix_web::http::header::HeaderMap;

/// Header carrying the opaque session token
pub const SESSION_HEADER: &str = "X-Session-ID";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("missing session token")]
    Missing,
    #[error("malformed session token")]
    Malformed,
}

/// Validates the session credential carried in request headers
pub trait SessionValidator: Send + Sync {
    fn check_session(&self, headers: &HeaderMap) -> Result<(), SessionError>;
}

/// Default validator: the token must be present, non-empty ASCII with no
/// whitespace. Anything stronger is delegated to the upstream authenticator.
#[derive(Debug, Clone, Default)]
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }
}

impl SessionValidator for SessionService {
    fn check_session(&self, headers: &HeaderMap) -> Result<(), SessionError> {
        let token = headers
            .get(SESSION_HEADER)
            .ok_or(SessionError::Missing)?
            .to_str()
            .map_err(|_| SessionError::Malformed)?;

        if token.is_empty() || !token.chars().all(|c| c.is_ascii_graphic()) {
            return Err(SessionError::Malformed);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-session-id"),
            HeaderValue::from_str(token).unwrap(),
        );
        headers
    }

    #[test]
    fn test_valid_token_passes() {
        let svc = SessionService::new();
        assert!(svc.check_session(&headers_with_token("deadbeef42")).is_ok());
    }

    #[test]
    fn test_missing_token_rejected() {
        let svc = SessionService::new();
        let headers = HeaderMap::new();
        assert!(matches!(
            svc.check_session(&headers),
            Err(SessionError::Missing)
        ));
    }

    #[test]
    fn test_empty_token_rejected() {
        let svc = SessionService::new();
        assert!(matches!(
            svc.check_session(&headers_with_token("")),
            Err(SessionError::Malformed)
        ));
    }

    #[test]
    fn test_token_with_spaces_rejected() {
        let svc = SessionService::new();
        assert!(matches!(
            svc.check_session(&headers_with_token("bad token")),
            Err(SessionError::Malformed)
        ));
    }
}
