//! # Validation Module
//!
//! Argument checks that run before any arithmetic.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Happen                                │
//! │                                                                         │
//! │  Money::percentage(34)   ──► validate_percentage    ──► Amount         │
//! │  Money::allocate([1, 3]) ──► validate_ratios        ──► Amount         │
//! │  Money::from_major_minor ──► validate_minor_units   ──► Amount         │
//! │                                                                         │
//! │  Amount itself never validates: it trusts its caller.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_percentage, validate_ratios};
//!
//! assert!(validate_percentage(34).is_ok());
//! assert!(validate_percentage(101).is_err());
//! assert_eq!(validate_ratios(&[1, 3]).unwrap(), 4);
//! ```

use crate::error::{MoneyError, MoneyResult, ValidationError};

/// Lowest accepted percentage.
pub const MIN_PERCENT: i64 = 0;

/// Highest accepted percentage.
pub const MAX_PERCENT: i64 = 100;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a percentage lies in `0..=100`.
pub fn validate_percentage(percent: i64) -> MoneyResult<()> {
    if !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) {
        return Err(MoneyError::PercentageOutOfRange(percent));
    }
    Ok(())
}

/// Validates an allocation ratio list and returns its total.
///
/// ## Rules
/// - Must not be empty
/// - No ratio may be negative
/// - At least one ratio must be positive (zeros are allowed alongside)
/// - The total must fit in `i64`
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_ratios;
/// use tally_core::MoneyError;
///
/// assert_eq!(validate_ratios(&[50, 50]).unwrap(), 100);
/// assert_eq!(validate_ratios(&[]), Err(MoneyError::EmptyRatioList));
/// ```
pub fn validate_ratios(ratios: &[i64]) -> MoneyResult<i64> {
    if ratios.is_empty() {
        return Err(MoneyError::EmptyRatioList);
    }

    let mut total: i64 = 0;
    for (index, &ratio) in ratios.iter().enumerate() {
        if ratio < 0 {
            return Err(MoneyError::InvalidRatio { index, ratio });
        }
        total = total.checked_add(ratio).ok_or(MoneyError::Overflow)?;
    }

    if total == 0 {
        return Err(ValidationError::MustBePositive {
            field: "ratios".to_string(),
        }
        .into());
    }

    Ok(total)
}

/// Validates the minor part of a major/minor pair against the currency
/// scale: `0 <= minor < scale`.
///
/// The sign belongs to the major part, so a negative minor is rejected, as
/// is a minor part that would carry into the major part.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_minor_units;
///
/// assert!(validate_minor_units(99, 100).is_ok());
/// assert!(validate_minor_units(100, 100).is_err());
/// assert!(validate_minor_units(-50, 100).is_err());
/// ```
pub fn validate_minor_units(minor: i64, scale: i64) -> MoneyResult<()> {
    if !(0..scale).contains(&minor) {
        return Err(ValidationError::OutOfRange {
            field: "minor".to_string(),
            value: minor,
            min: 0,
            max: scale - 1,
        }
        .into());
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_percentage_bounds() {
        assert!(validate_percentage(0).is_ok());
        assert!(validate_percentage(100).is_ok());
        assert_eq!(
            validate_percentage(-1),
            Err(MoneyError::PercentageOutOfRange(-1))
        );
        assert_eq!(
            validate_percentage(101),
            Err(MoneyError::PercentageOutOfRange(101))
        );
    }

    #[test]
    fn test_validate_ratios() {
        assert_eq!(validate_ratios(&[1, 3]), Ok(4));
        assert_eq!(validate_ratios(&[0, 5]), Ok(5));
        assert_eq!(validate_ratios(&[]), Err(MoneyError::EmptyRatioList));
        assert_eq!(
            validate_ratios(&[2, -1]),
            Err(MoneyError::InvalidRatio { index: 1, ratio: -1 })
        );
        assert!(matches!(
            validate_ratios(&[0, 0]),
            Err(MoneyError::Validation(ValidationError::MustBePositive { .. }))
        ));
        assert_eq!(
            validate_ratios(&[i64::MAX, 1]),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_validate_minor_units() {
        assert!(validate_minor_units(0, 100).is_ok());
        assert!(validate_minor_units(99, 100).is_ok());
        assert!(validate_minor_units(0, 1).is_ok());
        assert_eq!(
            validate_minor_units(150, 100),
            Err(MoneyError::Validation(ValidationError::OutOfRange {
                field: "minor".to_string(),
                value: 150,
                min: 0,
                max: 99,
            }))
        );
        assert!(validate_minor_units(-50, 100).is_err());
        assert!(validate_minor_units(1, 1).is_err());
    }
}
