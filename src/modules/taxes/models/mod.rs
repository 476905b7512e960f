pub mod rounding;

pub use rounding::RoundingMode;
