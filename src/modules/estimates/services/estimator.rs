//! Billing estimate computation.
//!
//! `estimate` is pure: the same items, discount and configuration always give
//! the same result, and nothing outside its arguments is read or written.
//! Amounts use checked i64 arithmetic; tax uses exact decimal multiplication
//! followed by a single rounding step per line.

use crate::config::EstimatorConfig;
use crate::modules::estimates::error::{EstimateError, ItemField, OverflowStage};
use crate::modules::estimates::models::{EstimateRequest, EstimateResult, LineBreakdown, LineItem};
use crate::modules::taxes::TaxCalculator;

/// Compute subtotal, per-line GST, applied discount and total.
///
/// All inputs are validated before any arithmetic; the first violation in
/// input order is returned. Tax is computed and rounded per line, then summed.
/// A discount larger than subtotal + tax is clamped so the total is never
/// negative, but a negative discount is rejected.
pub fn estimate(
    items: &[LineItem],
    discount_minor: i64,
    config: &EstimatorConfig,
) -> Result<EstimateResult, EstimateError> {
    let tax_calculator = TaxCalculator::new(config.rounding);

    validate(items, discount_minor, config, &tax_calculator)?;

    let mut subtotal_minor: i64 = 0;
    let mut tax_minor: i64 = 0;
    let mut lines = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let tax_rate = item.effective_tax_rate(config.default_tax_rate);

        let line_subtotal = item
            .quantity
            .checked_mul(item.unit_price_minor)
            .ok_or(EstimateError::Overflow {
                stage: OverflowStage::LineSubtotal,
                index: Some(index),
            })?;

        let line_tax = tax_calculator
            .calculate_tax(line_subtotal, tax_rate)
            .ok_or(EstimateError::Overflow {
                stage: OverflowStage::LineTax,
                index: Some(index),
            })?;

        subtotal_minor = subtotal_minor
            .checked_add(line_subtotal)
            .ok_or(EstimateError::Overflow {
                stage: OverflowStage::Subtotal,
                index: Some(index),
            })?;

        tax_minor = tax_minor
            .checked_add(line_tax)
            .ok_or(EstimateError::Overflow {
                stage: OverflowStage::Tax,
                index: Some(index),
            })?;

        lines.push(LineBreakdown {
            index,
            description: item.description.clone(),
            tax_rate,
            subtotal_minor: line_subtotal,
            tax_minor: line_tax,
        });
    }

    let gross = subtotal_minor
        .checked_add(tax_minor)
        .ok_or(EstimateError::Overflow {
            stage: OverflowStage::Total,
            index: None,
        })?;

    // Both are non-negative here, so the subtraction cannot go below zero
    let applied_discount = discount_minor.min(gross);
    let total_minor = gross - applied_discount;

    Ok(EstimateResult {
        subtotal_minor,
        tax_minor,
        discount_minor: applied_discount,
        total_minor,
        lines,
    })
}

/// Estimate a deserialized request body
pub fn estimate_request(
    request: &EstimateRequest,
    config: &EstimatorConfig,
) -> Result<EstimateResult, EstimateError> {
    estimate(&request.items, request.discount_minor, config)
}

fn validate(
    items: &[LineItem],
    discount_minor: i64,
    config: &EstimatorConfig,
    tax_calculator: &TaxCalculator,
) -> Result<(), EstimateError> {
    if items.len() > config.max_line_items {
        return Err(EstimateError::TooManyItems {
            count: items.len(),
            max: config.max_line_items,
        });
    }

    for (index, item) in items.iter().enumerate() {
        item.validate(index)?;

        tax_calculator
            .validate_tax_rate(item.effective_tax_rate(config.default_tax_rate))
            .map_err(|reason| EstimateError::InvalidItem {
                index,
                field: ItemField::TaxRate,
                reason,
            })?;
    }

    if discount_minor < 0 {
        return Err(EstimateError::InvalidDiscount {
            reason: format!("must be non-negative, got {}", discount_minor),
        });
    }

    Ok(())
}
