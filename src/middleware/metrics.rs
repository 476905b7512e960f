// Metrics middleware for collecting response times and status classes
//
// Tracks:
// - Request response times (min/avg/max)
// - HTTP status classes (2xx, 4xx, 5xx)
// - Request and error counts by route pattern

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::collections::HashMap;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::core::AppError;
use crate::middleware::request_id::RequestIdValue;

/// Bucket for requests that matched no route, so unknown URLs share one entry
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

/// Metrics storage
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    data: Arc<Mutex<MetricsData>>,
}

#[derive(Debug, Default)]
pub(crate) struct MetricsData {
    pub(crate) total_requests: u64,
    pub(crate) successful_requests: u64,
    pub(crate) client_errors: u64,
    pub(crate) server_errors: u64,
    pub(crate) total_response_time_ms: u64,
    pub(crate) min_response_time_ms: u64,
    pub(crate) max_response_time_ms: u64,
    pub(crate) endpoint_counts: HashMap<String, u64>,
    pub(crate) endpoint_errors: HashMap<String, u64>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request metric
    fn record_request(&self, path: &str, status_code: u16, response_time_ms: u64) {
        let mut data = match self.data.lock() {
            Ok(data) => data,
            Err(_) => {
                tracing::error!(path = %path, "Metrics lock poisoned, dropping sample");
                return;
            }
        };

        data.total_requests += 1;
        data.total_response_time_ms += response_time_ms;

        if data.min_response_time_ms == 0 || response_time_ms < data.min_response_time_ms {
            data.min_response_time_ms = response_time_ms;
        }
        if response_time_ms > data.max_response_time_ms {
            data.max_response_time_ms = response_time_ms;
        }

        match status_code {
            200..=299 => data.successful_requests += 1,
            400..=499 => data.client_errors += 1,
            500..=599 => data.server_errors += 1,
            _ => {}
        }

        *data.endpoint_counts.entry(path.to_string()).or_insert(0) += 1;

        if status_code >= 400 {
            *data.endpoint_errors.entry(path.to_string()).or_insert(0) += 1;
        }
    }

    /// Get current metrics snapshot
    pub fn get_metrics(&self) -> Result<Metrics, AppError> {
        let data = self
            .data
            .lock()
            .map_err(|_| AppError::internal("Metrics lock poisoned"))?;

        let avg_response_time_ms = if data.total_requests > 0 {
            data.total_response_time_ms / data.total_requests
        } else {
            0
        };

        let error_rate = if data.total_requests > 0 {
            ((data.client_errors + data.server_errors) as f64 / data.total_requests as f64) * 100.0
        } else {
            0.0
        };

        let success_rate = if data.total_requests > 0 {
            (data.successful_requests as f64 / data.total_requests as f64) * 100.0
        } else {
            0.0
        };

        Ok(Metrics {
            total_requests: data.total_requests,
            successful_requests: data.successful_requests,
            client_errors: data.client_errors,
            server_errors: data.server_errors,
            avg_response_time_ms,
            min_response_time_ms: data.min_response_time_ms,
            max_response_time_ms: data.max_response_time_ms,
            error_rate,
            success_rate,
            endpoint_counts: data.endpoint_counts.clone(),
            endpoint_errors: data.endpoint_errors.clone(),
        })
    }

    /// Reset all metrics
    pub fn reset(&self) {
        if let Ok(mut data) = self.data.lock() {
            *data = MetricsData::default();
        }
    }

    #[cfg(test)]
    pub(crate) fn set_test_data<F>(&self, f: F)
    where
        F: FnOnce(&mut MetricsData),
    {
        let mut data = self.data.lock().unwrap();
        f(&mut data);
    }
}

/// Metrics snapshot
#[derive(Debug, Clone, serde::Serialize)]
pub struct Metrics {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub client_errors: u64,
    pub server_errors: u64,
    pub avg_response_time_ms: u64,
    pub min_response_time_ms: u64,
    pub max_response_time_ms: u64,
    pub error_rate: f64,
    pub success_rate: f64,
    pub endpoint_counts: HashMap<String, u64>,
    pub endpoint_errors: HashMap<String, u64>,
}

/// Metrics middleware
pub struct MetricsMiddleware {
    collector: MetricsCollector,
}

impl MetricsMiddleware {
    pub fn new(collector: MetricsCollector) -> Self {
        Self { collector }
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
            collector: self.collector.clone(),
        }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: Rc<S>,
    collector: MetricsCollector,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
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
        let collector = self.collector.clone();
        let start_time = Instant::now();

        Box::pin(async move {
            let request_id = req
                .extensions()
                .get::<RequestIdValue>()
                .map(|id| id.0.clone())
                .unwrap_or_else(|| "unknown".to_string());

            let response = svc.call(req).await?;

            // Routing has run by now; key on the pattern, never the raw path
            let path = response
                .request()
                .match_pattern()
                .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());
            let response_time_ms = start_time.elapsed().as_millis() as u64;
            let status_code = response.status().as_u16();

            collector.record_request(&path, status_code, response_time_ms);

            tracing::debug!(
                request_id = %request_id,
                path = %path,
                status = status_code,
                response_time_ms = response_time_ms,
                "Request metrics recorded"
            );

            Ok(response)
        })
    }
}
