//! Pricing error types

use thiserror::Error;

use super::units::UnitCategory;

/// Errors raised by per-unit price calculation and comparison
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Unrecognized unit type: '{unit}'")]
    UnrecognizedUnit { unit: String },

    #[error("{field} must be greater than 0")]
    DegenerateQuantity { field: &'static str },

    #[error("{field} must be a non-negative finite number, got {value}")]
    InvalidQuantity { field: &'static str, value: f64 },

    #[error("{what} of {value} is outside the representable range")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("Cannot compare {first} units with {second} units. Please use the same type of units for both items.")]
    MismatchedCategory {
        first: UnitCategory,
        second: UnitCategory,
    },
}

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;
