use actix_web::{
    body::{BoxBody, EitherBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::future::{ready, Ready};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::Arc;

use crate::core::AppError;

/// Probe paths never throttled
const EXEMPT_PATHS: [&str; 3] = ["/", "/health", "/ready"];

type DirectLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Global rate limiting middleware using governor
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DirectLimiter>,
    requests_per_minute: u32,
}

impl RateLimiter {
    /// Create a new rate limiter with specified requests per minute
    pub fn new(requests_per_minute: u32) -> Result<Self, AppError> {
        let per_minute = NonZeroU32::new(requests_per_minute).ok_or_else(|| {
            AppError::configuration("Rate limit must be greater than 0")
        })?;
        let limiter = Arc::new(GovernorRateLimiter::direct(Quota::per_minute(per_minute)));

        Ok(Self {
            limiter,
            requests_per_minute,
        })
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<BoxBody, B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
            requests_per_minute: self.requests_per_minute,
        }))
    }
}

pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    limiter: Arc<DirectLimiter>,
    requests_per_minute: u32,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<BoxBody, B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let limiter = self.limiter.clone();
        let requests_per_minute = self.requests_per_minute;

        Box::pin(async move {
            if EXEMPT_PATHS.contains(&req.path()) {
                return svc.call(req).await.map(|res| res.map_into_right_body());
            }

            match limiter.check() {
                Ok(_) => svc.call(req).await.map(|res| res.map_into_right_body()),
                Err(_) => {
                    tracing::warn!(path = %req.path(), "Rate limit exceeded");
                    let error_response = AppError::RateLimitExceeded(format!(
                        "Maximum {} requests per minute",
                        requests_per_minute
                    ));
                    let http_response = error_response.error_response();
                    Ok(req.into_response(http_response).map_into_left_body())
                }
            }
        })
    }
}
