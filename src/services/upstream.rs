//! Shared execution path for upstream calls.
//!
//! Every outbound exchange goes through [`execute`], which validates request
//! construction before use, measures latency, and records exactly one
//! external-call metric observation whatever the outcome.

use crate::{error::GatewayError, services::AppMetrics};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Instant;

pub(crate) async fn execute(
    http: &Client,
    metrics: &AppMetrics,
    service: &'static str,
    req: RequestBuilder,
) -> Result<Response, GatewayError> {
    // Construction is checked before anything touches the request
    let req = req
        .build()
        .map_err(|source| GatewayError::Transport { service, source })?;
    let url = req.url().clone();
    let path = url.path().to_string();

    tracing::info!(service, url = %url, "created upstream request");

    let start = Instant::now();
    let result = http.execute(req).await;
    let latency = start.elapsed();

    let resp = match result {
        Ok(resp) => resp,
        Err(source) => {
            tracing::error!(service, url = %url, error = %source, "failed to call external service");
            metrics.record_external_call(service, &path, latency, None);
            return Err(GatewayError::Transport { service, source });
        }
    };

    let status = resp.status().as_u16();
    metrics.record_external_call(service, &path, latency, Some(status));
    tracing::info!(service, url = %url, status, "got response from external service");

    if status != 200 {
        tracing::error!(service, url = %url, status, "unexpected status from external service");
        return Err(GatewayError::UpstreamStatus { service, status });
    }

    Ok(resp)
}
