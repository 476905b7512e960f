use actix_web::{web, HttpResponse};

use crate::config::EstimatorConfig;
use crate::core::error::AppError;
use crate::modules::estimates::models::EstimateRequest;
use crate::modules::estimates::services::estimator;

/// Compute a billing estimate
/// POST /api/estimates
#[tracing::instrument(skip(config, request), fields(items = request.items.len()))]
pub async fn create_estimate(
    config: web::Data<EstimatorConfig>,
    request: web::Json<EstimateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let result = estimator::estimate_request(&request, config.get_ref()).map_err(|err| {
        tracing::warn!(error = %err, "Estimate rejected");
        err
    })?;

    tracing::debug!(
        subtotal_cents = result.subtotal_minor,
        gst_cents = result.tax_minor,
        discount_cents = result.discount_minor,
        total_cents = result.total_minor,
        "Estimate computed"
    );

    Ok(HttpResponse::Ok().json(result))
}

/// Configure estimate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/estimates").route("", web::post().to(create_estimate)),
    );
}
