pub mod estimate_controller;

pub use estimate_controller::configure;
