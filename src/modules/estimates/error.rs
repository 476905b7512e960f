use serde::Serialize;
use std::fmt;

/// Line item field named in validation errors, using the wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemField {
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "quantity")]
    Quantity,
    #[serde(rename = "unit_price_cents")]
    UnitPrice,
    #[serde(rename = "gst_rate")]
    TaxRate,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemField::Description => write!(f, "description"),
            ItemField::Quantity => write!(f, "quantity"),
            ItemField::UnitPrice => write!(f, "unit_price_cents"),
            ItemField::TaxRate => write!(f, "gst_rate"),
        }
    }
}

/// Step of the estimate at which checked arithmetic failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowStage {
    LineSubtotal,
    Subtotal,
    LineTax,
    Tax,
    Total,
}

impl fmt::Display for OverflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowStage::LineSubtotal => write!(f, "line subtotal"),
            OverflowStage::Subtotal => write!(f, "subtotal"),
            OverflowStage::LineTax => write!(f, "line tax"),
            OverflowStage::Tax => write!(f, "tax total"),
            OverflowStage::Total => write!(f, "total"),
        }
    }
}

/// Errors produced while estimating. An estimate either succeeds completely or
/// fails with exactly one of these; no partial result exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    /// A line item field violates its constraint
    #[error("items[{index}].{field}: {reason}")]
    InvalidItem {
        index: usize,
        field: ItemField,
        reason: String,
    },

    /// The flat discount is negative
    #[error("discount_cents: {reason}")]
    InvalidDiscount { reason: String },

    /// More line items than the configured maximum
    #[error("Estimate has {count} line items, maximum is {max}")]
    TooManyItems { count: usize, max: usize },

    /// An intermediate amount does not fit in 64 bits
    #[error("Arithmetic overflow while computing {stage}")]
    Overflow {
        stage: OverflowStage,
        index: Option<usize>,
    },
}

impl EstimateError {
    pub fn is_overflow(&self) -> bool {
        matches!(self, EstimateError::Overflow { .. })
    }

    /// Structured details for the error envelope
    pub fn details(&self) -> serde_json::Value {
        match self {
            EstimateError::InvalidItem { index, field, .. } => serde_json::json!({
                "field": field,
                "index": index,
            }),
            EstimateError::InvalidDiscount { .. } => serde_json::json!({
                "field": "discount_cents",
            }),
            EstimateError::TooManyItems { count, max } => serde_json::json!({
                "field": "items",
                "count": count,
                "max": max,
            }),
            EstimateError::Overflow { stage, index } => serde_json::json!({
                "stage": stage,
                "index": index,
            }),
        }
    }
}
