use actix_web::web;

use crate::middleware::json_error_handler;

pub mod estimates;
pub mod health;
pub mod taxes;

/// Register every route and the JSON extractor configuration.
///
/// Shared state (`EstimatorConfig`, `MetricsCollector`) is registered by the
/// caller so tests can supply their own.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(health::controllers::configure)
        .configure(health::controllers::metrics::configure)
        .configure(estimates::controllers::configure);
}
