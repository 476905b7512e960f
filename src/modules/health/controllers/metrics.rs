// Metrics endpoint controller - exposes collected metrics
//
// GET /metrics - Returns current metrics snapshot

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::middleware::MetricsCollector;

/// Get current metrics
#[tracing::instrument(skip(collector))]
pub async fn get_metrics(
    collector: web::Data<MetricsCollector>,
) -> Result<HttpResponse, AppError> {
    let metrics = collector.get_metrics()?;
    Ok(HttpResponse::Ok().json(metrics))
}

/// Configure metrics route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(get_metrics));
}
