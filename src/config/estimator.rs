use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

use crate::core::{AppError, Result};
use crate::modules::taxes::RoundingMode;

/// Default cap on line items per estimate
pub const DEFAULT_MAX_LINE_ITEMS: usize = 500;

/// Estimator settings, passed explicitly into every estimate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Rate applied to items that carry no gst_rate
    pub default_tax_rate: Decimal,
    /// Rounding applied to each line's tax
    pub rounding: RoundingMode,
    /// Upper bound on items per request
    pub max_line_items: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_tax_rate: Decimal::ZERO,
            rounding: RoundingMode::default(),
            max_line_items: DEFAULT_MAX_LINE_ITEMS,
        }
    }
}

impl EstimatorConfig {
    pub fn from_env() -> Result<Self> {
        Ok(EstimatorConfig {
            default_tax_rate: env::var("ESTIMATOR_DEFAULT_TAX_RATE")
                .map(|raw| Decimal::from_str(raw.trim()))
                .unwrap_or(Ok(Decimal::ZERO))
                .map_err(|_| {
                    AppError::Configuration("Invalid ESTIMATOR_DEFAULT_TAX_RATE".to_string())
                })?,
            rounding: env::var("ESTIMATOR_ROUNDING")
                .unwrap_or_else(|_| "half_up".to_string())
                .parse()
                .map_err(AppError::Configuration)?,
            max_line_items: env::var("ESTIMATOR_MAX_LINE_ITEMS")
                .unwrap_or_else(|_| DEFAULT_MAX_LINE_ITEMS.to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid ESTIMATOR_MAX_LINE_ITEMS".to_string())
                })?,
        })
    }

    pub fn with_default_tax_rate(mut self, rate: Decimal) -> Self {
        self.default_tax_rate = rate;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_max_line_items(mut self, max: usize) -> Self {
        self.max_line_items = max;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_tax_rate < Decimal::ZERO || self.default_tax_rate > Decimal::ONE {
            return Err(AppError::Configuration(format!(
                "Default tax rate must be between 0 and 1, got {}",
                self.default_tax_rate
            )));
        }

        if self.max_line_items == 0 {
            return Err(AppError::Configuration(
                "Max line items must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
