//! # Validation Module
//!
//! Coercion of free-text input into the numeric types products need.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Operator types "12 "                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_quantity (this module) ── trims, parses ──► Ok(12)              │
//! │       │                                                                 │
//! │       └── "twelve" ──► Err(ValidationError) ──► prompt loop asks again │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the shape of the text is checked. Negative quantities and prices
//! are accepted.

use std::str::FromStr;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const WHOLE_NUMBER: &str = "must be a whole number";
const NUMBER: &str = "must be a number";

fn parse_trimmed<T: FromStr>(field: &str, input: &str, reason: &str) -> ValidationResult<T> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| ValidationError::invalid_format(field, reason))
}

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Parses a stock quantity.
///
/// ## Example
/// ```rust
/// use inventario_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("100").unwrap(), 100);
/// assert_eq!(parse_quantity("-3").unwrap(), -3);
/// assert!(parse_quantity("1.5").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    parse_trimmed("Quantity", input, WHOLE_NUMBER)
}

/// Parses a unit price.
///
/// ## Example
/// ```rust
/// use inventario_core::validation::parse_price;
///
/// assert_eq!(parse_price("0.1").unwrap(), 0.1);
/// assert_eq!(parse_price("3").unwrap(), 3.0);
/// assert!(parse_price("").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<f64> {
    parse_trimmed("Price", input, NUMBER)
}

/// Parses a low-stock threshold.
pub fn parse_threshold(input: &str) -> ValidationResult<i64> {
    parse_trimmed("Threshold", input, WHOLE_NUMBER)
}

/// Parses a product id typed by the operator.
pub fn parse_product_id(input: &str) -> ValidationResult<i64> {
    parse_trimmed("ID", input, WHOLE_NUMBER)
}
