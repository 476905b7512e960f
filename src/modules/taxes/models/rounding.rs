use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a fractional line tax is rounded to a whole minor unit.
///
/// Rounding is applied to each line independently, so the mode can change
/// the last cent of every line, not just the invoice total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Midpoint rounds away from zero (12.5 -> 13). Matches GST invoice practice.
    #[default]
    HalfUp,
    /// Banker's rounding, midpoint to the nearest even unit (12.5 -> 12, 13.5 -> 14)
    HalfEven,
}

impl RoundingMode {
    /// Returns the rust_decimal strategy implementing this mode
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::HalfUp => write!(f, "half_up"),
            RoundingMode::HalfEven => write!(f, "half_even"),
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "half_up" => Ok(RoundingMode::HalfUp),
            "half_even" | "bankers" => Ok(RoundingMode::HalfEven),
            _ => Err(format!("Invalid rounding mode: {}", s)),
        }
    }
}
