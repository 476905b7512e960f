use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::config::EstimatorConfig;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub configuration: bool,
    pub application: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// The estimator has no external dependencies; it is ready once its
/// configuration is registered and valid.
pub async fn readiness_check(config: Option<web::Data<EstimatorConfig>>) -> impl Responder {
    let configuration = match config {
        Some(config) => match config.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Estimator configuration readiness check failed: {}", e);
                false
            }
        },
        None => {
            tracing::error!("Estimator configuration is not registered");
            false
        }
    };

    let checks = ReadinessChecks {
        configuration,
        application: true,
    };
    let ready = checks.configuration && checks.application;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// GET / - Service banner
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Billing Estimator",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
