//! # Price Math
//!
//! Numeric building blocks shared by the price outlook crates.
//! This crate provides the pairing rule used when comparing a historical
//! series with a forecast, calendar-month stepping for forecast dates, and
//! percentage calculations.

use thiserror::Error;

pub mod alignment;
pub mod calendar;
pub mod change;

pub use alignment::{tail_pairs, TailPairs};
pub use calendar::{add_months, month_label};
pub use change::{mean, percent_change};

/// Errors that can occur in price calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for price math operations
pub type Result<T> = std::result::Result<T, MathError>;
