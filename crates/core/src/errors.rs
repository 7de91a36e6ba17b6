//! Core error types for the childcare calculator.
//!
//! The calculator itself never fails: malformed input degrades to zeroed
//! fields. These types cover the input layer, which rejects values a field
//! would not accept, and the analytics sink.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculator crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Analytics tracking failed: {0}")]
    Analytics(#[from] AnalyticsError),
}

/// Validation errors for user input entered into an amount field.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(String),

    #[error("Value {value} is below the minimum of {min}")]
    BelowMinimum { value: Decimal, min: Decimal },

    #[error("Value {value} is above the maximum of {max}")]
    AboveMaximum { value: Decimal, max: Decimal },

    #[error("Value {value} has more than {decimal_places} decimal places")]
    TooManyDecimals { value: Decimal, decimal_places: u32 },

    #[error("Unknown tracking key '{0}'")]
    UnknownTrackingKey(String),
}

/// Errors raised by an analytics sink. Never propagated past
/// [`crate::analytics::track_outbound_click`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Analytics sink is unavailable")]
    Unavailable,

    #[error("Analytics sink rejected the event: {0}")]
    Rejected(String),
}
