// A line item is one billable entry on an estimate: a consultation, a bed-day,
// a pharmacy item. Amounts are integer minor units (paise/cents); the tax rate
// is an exact decimal fraction.

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::modules::estimates::error::{EstimateError, ItemField};

/// Maximum description length accepted on a line item
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Represents a single billable line in an estimate request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineItem {
    /// Description of the product or service (not used in computation)
    pub description: String,

    /// Number of units. Signed on the wire so negatives reach validation
    /// with their index instead of failing as a type error.
    pub quantity: i64,

    /// Price per unit in minor currency units
    #[serde(rename = "unit_price_cents")]
    pub unit_price_minor: i64,

    /// GST rate in [0, 1]. Falls back to the configured default when absent.
    /// Must be a JSON number that fits a `Decimal` without rounding.
    #[serde(
        rename = "gst_rate",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize",
        deserialize_with = "deserialize_exact_rate"
    )]
    pub tax_rate: Option<Decimal>,
}

impl LineItem {
    /// Create a line item without validating it; validation happens when the
    /// item is estimated, so errors can carry the item's position.
    pub fn new(
        description: impl Into<String>,
        quantity: i64,
        unit_price_minor: i64,
        tax_rate: Option<Decimal>,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price_minor,
            tax_rate,
        }
    }

    /// Tax rate for this line, using `default_rate` when none was supplied
    pub fn effective_tax_rate(&self, default_rate: Decimal) -> Decimal {
        self.tax_rate.unwrap_or(default_rate)
    }

    /// Validate the integer and text fields of the item at position `index`.
    /// The tax rate is checked by the tax calculator.
    pub fn validate(&self, index: usize) -> Result<(), EstimateError> {
        self.validate_description(index)?;
        self.validate_quantity(index)?;
        self.validate_unit_price(index)?;
        Ok(())
    }

    fn validate_description(&self, index: usize) -> Result<(), EstimateError> {
        if self.description.trim().is_empty() {
            return Err(EstimateError::InvalidItem {
                index,
                field: ItemField::Description,
                reason: "cannot be empty".to_string(),
            });
        }

        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(EstimateError::InvalidItem {
                index,
                field: ItemField::Description,
                reason: format!("cannot exceed {} characters", MAX_DESCRIPTION_LEN),
            });
        }

        Ok(())
    }

    fn validate_quantity(&self, index: usize) -> Result<(), EstimateError> {
        if self.quantity < 0 {
            return Err(EstimateError::InvalidItem {
                index,
                field: ItemField::Quantity,
                reason: format!("must be non-negative, got {}", self.quantity),
            });
        }

        Ok(())
    }

    fn validate_unit_price(&self, index: usize) -> Result<(), EstimateError> {
        if self.unit_price_minor < 0 {
            return Err(EstimateError::InvalidItem {
                index,
                field: ItemField::UnitPrice,
                reason: format!("must be non-negative, got {}", self.unit_price_minor),
            });
        }

        Ok(())
    }
}

/// Parse `gst_rate` from the literal JSON number text. Strings are refused, and
/// so are numbers `Decimal` could only hold after rounding: a rate just above
/// 1 must not collapse to 1 before range validation sees it.
fn deserialize_exact_rate<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let text = number.to_string();
    Decimal::from_str_exact(&text).map(Some).map_err(|_| {
        de::Error::custom(format!(
            "gst_rate {} is not an exactly representable decimal",
            text
        ))
    })
}
