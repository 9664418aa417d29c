//! Error logging middleware.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
};

/// Error log middleware factory
///
/// Logs downstream handler errors with method, path, and error detail, then
/// re-propagates the original result unchanged.
pub struct ErrorLog;

impl<S, B> Transform<S, ServiceRequest> for ErrorLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorLogService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorLogService { service }))
    }
}

/// The actual error log middleware service
pub struct ErrorLogService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorLogService<S>
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
        let method = req.method().to_string();
        let path = req.path().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // Handler errors are rendered into responses at the route level,
            // so they arrive here as Ok(res) with the error attached; errors
            // raised by inner middleware still arrive as Err.
            match &result {
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        tracing::error!(
                            method = %method,
                            path = %path,
                            error = %err,
                            "handler error"
                        );
                    }
                }
                Err(err) => {
                    tracing::error!(
                        method = %method,
                        path = %path,
                        error = %err,
                        "handler error"
                    );
                }
            }

            result
        })
    }
}
