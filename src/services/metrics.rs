//! Metrics collection and Prometheus integration.

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::Duration;

/// Status label recorded when an upstream call failed before any response
pub const CLIENT_ERROR_STATUS: &str = "http_client_error";

// Latency buckets sized for the upstream SLA
const LATENCY_BUCKETS: [f64; 4] = [0.005, 0.01, 0.02, 0.04];

/// Application metrics collector.
///
/// Owns a single `Registry`; one instance is created at startup and shared
/// through `web::Data`. Counters accumulate monotonically for the process
/// lifetime.
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_latency_seconds: HistogramVec,
    pub external_service_latency_seconds: HistogramVec,
    pub external_service_status_total: CounterVec,
}

impl AppMetrics {
    /// Create a new metrics collector with an owned registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new(
                "http_requests_total",
                "Total number of HTTP requests by method, endpoint, and status",
            ),
            &["method", "endpoint", "status"],
        )?;

        let http_request_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_latency_seconds",
                "Latency of HTTP requests in seconds",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
            &["method", "endpoint"],
        )?;

        let external_service_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "external_service_latency_seconds",
                "Latency of external service calls in seconds",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
            &["service", "path"],
        )?;

        let external_service_status_total = CounterVec::new(
            Opts::new(
                "external_service_status_total",
                "Total number of responses from external services by status code",
            ),
            &["service", "path", "status"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_latency_seconds.clone()))?;
        registry.register(Box::new(external_service_latency_seconds.clone()))?;
        registry.register(Box::new(external_service_status_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_latency_seconds,
            external_service_latency_seconds,
            external_service_status_total,
        })
    }

    /// Record an inbound HTTP request with method, endpoint, status, and duration
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16, duration: Duration) {
        if endpoint == "/metrics" {
            // Don't record the metrics endpoint itself to avoid noise
            return;
        }

        self.http_requests_total
            .with_label_values(&[method, endpoint, &status.to_string()])
            .inc();

        self.http_request_latency_seconds
            .with_label_values(&[method, endpoint])
            .observe(duration.as_secs_f64());
    }

    /// Record the outcome of one upstream call.
    ///
    /// `status` is `None` when the call failed before receiving a response,
    /// which records the `http_client_error` sentinel. Exactly one call per
    /// upstream exchange, whatever the outcome.
    pub fn record_external_call(
        &self,
        service: &str,
        path: &str,
        latency: Duration,
        status: Option<u16>,
    ) {
        self.external_service_latency_seconds
            .with_label_values(&[service, path])
            .observe(latency.as_secs_f64());

        match status {
            Some(code) => self
                .external_service_status_total
                .with_label_values(&[service, path, &code.to_string()])
                .inc(),
            None => self
                .external_service_status_total
                .with_label_values(&[service, path, CLIENT_ERROR_STATUS])
                .inc(),
        }
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder.encode_to_string(&metric_families)
    }
}
