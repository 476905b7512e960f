use crate::core::{AppError, Result};
use std::env;

pub mod estimator;
pub mod server;

pub use estimator::EstimatorConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub estimator: EstimatorConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid LOG_FORMAT: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub rate_limit_per_minute: u32,
    /// Origins allowed by CORS; `*` allows any
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()
                    .map_err(AppError::Configuration)?,
            },
            server: ServerConfig::from_env()?,
            estimator: EstimatorConfig::from_env()?,
            security: SecurityConfig {
                rate_limit_per_minute: env::var("RATE_LIMIT_PER_MINUTE")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid RATE_LIMIT_PER_MINUTE".to_string())
                    })?,
                cors_allowed_origins: parse_origins(
                    &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
                ),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.estimator.validate()?;

        if self.security.rate_limit_per_minute == 0 {
            return Err(AppError::Configuration(
                "Rate limit must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
