//! Session authentication middleware.

use crate::services::SessionValidator;
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    sync::Arc,
};

/// Session auth middleware factory
///
/// Delegates the header credential check to a [`SessionValidator`]. On
/// failure the request is answered with 401 and an empty body; the wrapped
/// service is never invoked.
pub struct SessionAuth {
    validator: Arc<dyn SessionValidator>,
}

impl SessionAuth {
    pub fn new(validator: Arc<dyn SessionValidator>) -> Self {
        Self { validator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthService {
            service,
            validator: self.validator.clone(),
        }))
    }
}

/// The actual session auth middleware service
pub struct SessionAuthService<S> {
    service: S,
    validator: Arc<dyn SessionValidator>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Err(err) = self.validator.check_session(req.headers()) {
            tracing::warn!(
                method = %req.method(),
                path = %req.path(),
                error = %err,
                "rejected unauthenticated request"
            );

            let (req, _payload) = req.into_parts();
            let res = HttpResponse::Unauthorized().finish().map_into_right_body();
            return Box::pin(ready(Ok(ServiceResponse::new(req, res))));
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
