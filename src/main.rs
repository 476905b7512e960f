use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use billing_estimator::config::{Config, LogFormat, SecurityConfig};
use billing_estimator::middleware::{
    ErrorHandler, MetricsCollector, MetricsMiddleware, RateLimiter, RequestId,
};
use billing_estimator::modules;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config);

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Billing Estimator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        default_tax_rate = %config.estimator.default_tax_rate,
        rounding = %config.estimator.rounding,
        max_line_items = config.estimator.max_line_items,
        "Estimator configured"
    );
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)
        .context("Failed to create rate limiter")?;
    let metrics = MetricsCollector::new();
    let estimator_config = web::Data::new(config.estimator.clone());
    let security = config.security.clone();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(estimator_config.clone())
            .app_data(web::Data::new(metrics.clone()))
            .wrap(ErrorHandler)
            .wrap(rate_limiter.clone())
            .wrap(MetricsMiddleware::new(metrics.clone()))
            .wrap(RequestId)
            .wrap(cors(&security))
            .wrap(TracingLogger::default())
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with error")
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "billing_estimator={},actix_web=info",
            config.app.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(security: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);

    if security.cors_allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    security
        .cors_allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
