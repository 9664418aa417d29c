//! Access logging middleware.

use crate::middleware::request_id::RequestId;
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    time::Instant,
};

/// Resolve the status that will actually be sent to the client.
///
/// Errored calls have not produced a response yet at this point in the chain;
/// their status comes from the error's `ResponseError` mapping, which is what
/// the framework renders at the root.
pub(crate) fn response_status<B>(result: &Result<ServiceResponse<B>, Error>) -> u16 {
    match result {
        Ok(res) => res.status().as_u16(),
        Err(err) => err.as_response_error().status_code().as_u16(),
    }
}

/// Access log middleware factory
///
/// Emits exactly one structured log line per request with the request ID,
/// method, path, status, and latency, after the downstream handler completes,
/// regardless of outcome.
pub struct AccessLog;

impl<S, B> Transform<S, ServiceRequest> for AccessLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessLogService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogService { service }))
    }
}

/// The actual access log middleware service
pub struct AccessLogService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AccessLogService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_default();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let latency = start.elapsed();

            tracing::info!(
                target: "access",
                request_id = %request_id,
                method = %method,
                path = %path,
                status = response_status(&result),
                latency_ms = latency.as_millis() as u64,
                "access log"
            );

            result
        })
    }
}
