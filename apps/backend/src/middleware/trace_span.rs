//! One `http_request` span per request.
//!
//! Handler and service logs inherit `trace_id`, `method` and `route`; the
//! response `status` is recorded on the span once the inner service returns.
//! Reads the id `RequestTrace` put in extensions, so wrap it inside `RequestTrace`.

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::field::Empty;
use tracing::{info_span, Instrument};

#[derive(Clone, Copy, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

/// Route template when one matched (`/api/v1/trainings/{id}`), else the raw path.
fn route_label(req: &ServiceRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| req.path().to_string())
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
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
        let trace_id = req.extensions().get::<String>().cloned().unwrap_or_default();

        let span = info_span!(
            "http_request",
            trace_id = %trace_id,
            method = %req.method(),
            route = %route_label(&req),
            status = Empty,
        );

        let fut = self.service.call(req).instrument(span.clone());
        Box::pin(async move {
            let result = fut.await;
            match &result {
                Ok(res) => span.record("status", res.status().as_u16()),
                Err(e) => span.record("status", e.as_response_error().status_code().as_u16()),
            };
            result
        })
    }
}
