pub mod estimate;
pub mod line_item;

pub use estimate::{EstimateRequest, EstimateResult, LineBreakdown};
pub use line_item::LineItem;
