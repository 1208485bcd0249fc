//! Savings calculation for the current-system vs. heat-pump comparison.

pub mod common;
pub mod savings;

pub use savings::{EstimateError, SavingsEstimator};
