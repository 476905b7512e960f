pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

pub use error::{EstimateError, ItemField, OverflowStage};
pub use models::{EstimateRequest, EstimateResult, LineBreakdown, LineItem};
pub use services::estimate;
