use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::modules::taxes::models::RoundingMode;

/// TaxCalculator handles per-line-item GST calculations in minor units
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxCalculator {
    rounding: RoundingMode,
}

impl TaxCalculator {
    pub fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    /// Calculate tax for one line: round(line_subtotal_minor × tax_rate).
    ///
    /// The product is exact (rust_decimal keeps 28 significant digits), so the
    /// only rounding step is the final one to a whole minor unit.
    ///
    /// Returns `None` when the result does not fit in i64. Callers are expected
    /// to have validated `tax_rate` first.
    pub fn calculate_tax(&self, line_subtotal_minor: i64, tax_rate: Decimal) -> Option<i64> {
        Decimal::from(line_subtotal_minor)
            .checked_mul(tax_rate)?
            .round_dp_with_strategy(0, self.rounding.strategy())
            .to_i64()
    }

    /// Validate tax rate is within the accepted range [0, 1]
    pub fn validate_tax_rate(&self, tax_rate: Decimal) -> Result<(), String> {
        if tax_rate < Decimal::ZERO {
            return Err(format!("Tax rate cannot be negative, got {}", tax_rate));
        }

        if tax_rate > Decimal::ONE {
            return Err(format!("Tax rate cannot exceed 1.0 (100%), got {}", tax_rate));
        }

        Ok(())
    }
}
