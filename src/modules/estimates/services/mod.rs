pub mod estimator;

pub use estimator::{estimate, estimate_request};
