//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── MoneyError       - Currency and arithmetic failures               │
//! │  └── ValidationError  - Argument validation failures                   │
//! │                                                                         │
//! │  tally-format errors (separate crate)                                  │
//! │  └── FormatError      - Config loading, wraps MoneyError               │
//! │                                                                         │
//! │  Flow: ValidationError → MoneyError → FormatError → caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (currency codes, rejected values)
//! 3. Errors are enum variants, never String
//! 4. Expected failures are returned, never panicked

use thiserror::Error;

// =============================================================================
// Money Error
// =============================================================================

/// Errors produced by [`Money`](crate::Money) construction and operations.
///
/// None of these are fatal. A failed operation produces no value, so a caller
/// can never observe a half-computed result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The currency code is not in the registry.
    ///
    /// ## When This Occurs
    /// - `Money::new(100, "USX")` (typo or unsupported code)
    /// - Deserializing a snapshot whose currency was removed from the table
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A binary operation was attempted between two currencies.
    ///
    /// ## User Workflow
    /// ```text
    /// USD 1.00 + EUR 1.00
    ///      │
    ///      ▼
    /// currency check: USD != EUR
    ///      │
    ///      ▼
    /// CurrencyMismatch { left: "USD", right: "EUR" }
    /// ```
    #[error("Currency mismatch: cannot operate on {left} and {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Percentage argument outside `0..=100`.
    #[error("Percentage {0} is out of range (expected 0 to 100)")]
    PercentageOutOfRange(i64),

    /// `allocate` was called without any ratios.
    #[error("Cannot allocate over an empty ratio list")]
    EmptyRatioList,

    /// A ratio in the allocation list is negative.
    #[error("Ratio at position {index} is negative: {ratio}")]
    InvalidRatio { index: usize, ratio: i64 },

    /// Strict-mode division or allocation with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Strict-mode arithmetic left the `i64` range.
    #[error("Overflow during calculation")]
    Overflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl MoneyError {
    /// Builds a `CurrencyMismatch` from the two offending codes.
    pub fn mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        MoneyError::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Argument validation errors.
///
/// These are raised by [`crate::validation`] before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value falls outside an inclusive range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with MoneyError.
pub type MoneyResult<T> = Result<T, MoneyError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MoneyError::mismatch("USD", "EUR");
        assert_eq!(
            err.to_string(),
            "Currency mismatch: cannot operate on USD and EUR"
        );

        assert_eq!(
            MoneyError::UnknownCurrency("USX".to_string()).to_string(),
            "Unknown currency code: USX"
        );
        assert_eq!(
            MoneyError::PercentageOutOfRange(101).to_string(),
            "Percentage 101 is out of range (expected 0 to 100)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "ratios".to_string(),
        };
        assert_eq!(err.to_string(), "ratios must be positive");

        let err = ValidationError::OutOfRange {
            field: "minor".to_string(),
            value: 150,
            min: 0,
            max: 99,
        };
        assert_eq!(err.to_string(), "minor must be between 0 and 99, got 150");
    }

    #[test]
    fn test_validation_converts_to_money_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "ratios".to_string(),
        };
        let money_err: MoneyError = validation_err.into();
        assert!(matches!(money_err, MoneyError::Validation(_)));
    }
}
