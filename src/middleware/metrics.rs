//! Metrics collection middleware.

use crate::{middleware::access_log::response_status, services::AppMetrics};
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    time::Instant,
};

/// Metrics middleware factory
///
/// Records a request counter labeled {method, endpoint, status} and a latency
/// histogram labeled {method, endpoint}, measured around the full downstream
/// call. Error outcomes are recorded with the status their error maps to.
pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsService { service }))
    }
}

/// The actual metrics middleware service
pub struct MetricsService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MetricsService<S>
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
        let metrics = req.app_data::<web::Data<AppMetrics>>().cloned();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let duration = start.elapsed();

            if let Some(metrics) = metrics {
                // Label with the matched route pattern, not the raw path, to
                // keep endpoint cardinality bounded
                let endpoint = match &result {
                    Ok(res) => res
                        .request()
                        .match_pattern()
                        .unwrap_or_else(|| path.clone()),
                    Err(_) => path.clone(),
                };

                metrics.record_request(&method, &endpoint, response_status(&result), duration);
            }

            result
        })
    }
}
