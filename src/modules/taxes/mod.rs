pub mod models;
pub mod services;

pub use models::RoundingMode;
pub use services::TaxCalculator;
