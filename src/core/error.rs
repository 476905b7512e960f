use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::modules::estimates::EstimateError;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Estimate input or arithmetic failures
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// Request validation errors outside the estimator (payload shape, headers)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable error code used in the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Estimate(err) if err.is_overflow() => "ARITHMETIC_OVERFLOW",
            AppError::Estimate(_) | AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::RateLimitExceeded(_) => "RATE_LIMIT_EXCEEDED",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Json(_) => "INVALID_JSON",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        // Internal details stay in the logs
        let message = match self {
            AppError::Configuration(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed with server error");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let mut body = serde_json::json!({
            "error": {
                "code": self.code(),
                "message": message,
            }
        });

        if let AppError::Estimate(err) = self {
            body["error"]["details"] = err.details();
        }

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Estimate(err) if err.is_overflow() => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Estimate(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
