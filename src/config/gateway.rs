//! Gateway listener and upstream service configuration.

use std::env;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_THREAD_SERVICE_URL: &str = "http://vk-golang.ru:15000";
const DEFAULT_COMMENT_SERVICE_URL: &str = "http://vk-golang.ru:16000";
const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 5;

/// Top-level gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to
    pub listen_addr: String,
    pub upstream: UpstreamConfig,
}

/// Upstream thread/comment service endpoints
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the thread service
    pub thread_service_url: String,
    /// Base URL of the comment service
    pub comment_service_url: String,
    /// Deadline applied to every outbound call
    pub request_timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            thread_service_url: DEFAULT_THREAD_SERVICE_URL.to_string(),
            comment_service_url: DEFAULT_COMMENT_SERVICE_URL.to_string(),
            request_timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let listen_addr =
            env::var("GATEWAY_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Self {
            listen_addr,
            upstream: UpstreamConfig::from_env(),
        }
    }
}

impl UpstreamConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let thread_service_url = env::var("THREAD_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_THREAD_SERVICE_URL.to_string());

        let comment_service_url = env::var("COMMENT_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_COMMENT_SERVICE_URL.to_string());

        let request_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECONDS);

        Self {
            thread_service_url,
            comment_service_url,
            request_timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.upstream.request_timeout_seconds, 5);
        assert!(config.upstream.thread_service_url.starts_with("http://"));
        assert!(config.upstream.comment_service_url.starts_with("http://"));
    }
}
