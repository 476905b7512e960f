use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Request body for POST /api/estimates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateRequest {
    /// Billable lines, in display order
    pub items: Vec<LineItem>,

    /// Flat discount applied after tax
    #[serde(rename = "discount_cents", default)]
    pub discount_minor: i64,
}

impl EstimateRequest {
    pub fn new(items: Vec<LineItem>, discount_minor: i64) -> Self {
        Self {
            items,
            discount_minor,
        }
    }
}

/// Itemized amounts for one input line, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBreakdown {
    /// Position of the line in the request
    pub index: usize,
    pub description: String,

    /// Rate actually applied (explicit or configured default)
    #[serde(rename = "gst_rate", with = "rust_decimal::serde::arbitrary_precision")]
    pub tax_rate: Decimal,

    #[serde(rename = "subtotal_cents")]
    pub subtotal_minor: i64,

    #[serde(rename = "gst_cents")]
    pub tax_minor: i64,
}

/// Computed estimate. Every amount is a non-negative minor-unit integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Σ quantity × unit price
    #[serde(rename = "subtotal_cents")]
    pub subtotal_minor: i64,

    /// Σ per-line rounded tax
    #[serde(rename = "gst_cents")]
    pub tax_minor: i64,

    /// Discount actually applied, never more than subtotal + tax
    #[serde(rename = "discount_cents")]
    pub discount_minor: i64,

    /// subtotal + tax - discount, floored at zero
    #[serde(rename = "total_cents")]
    pub total_minor: i64,

    pub lines: Vec<LineBreakdown>,
}

impl EstimateResult {
    /// All-zero estimate with no lines
    pub fn empty() -> Self {
        Self {
            subtotal_minor: 0,
            tax_minor: 0,
            discount_minor: 0,
            total_minor: 0,
            lines: Vec::new(),
        }
    }
}
