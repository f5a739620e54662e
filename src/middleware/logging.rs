//! Request logging middleware.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use std::time::Instant;

pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestLoggerService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let res = svc.call(req).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            match &res {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() {
                        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, "request completed");
                    } else if status.is_client_error() {
                        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request completed");
                    } else {
                        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "request completed");
                    }
                }
                Err(error) => {
                    tracing::error!(%method, %path, %error, elapsed_ms, "request failed");
                }
            }

            res
        })
    }
}
