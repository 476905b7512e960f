//! Billing Estimator Library
//!
//! Computes hospital billing estimates (subtotal, per-line GST, clamped
//! discount, total) in integer minor currency units, and serves them over HTTP.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::estimates;
pub use modules::taxes;
