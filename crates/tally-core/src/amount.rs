//! # Amount Module
//!
//! The integer engine underneath [`Money`](crate::Money). An `Amount` is a
//! signed count of minor units (cents, pence, yen) with no currency attached.
//!
//! ## Rounding Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TWO RULES, ON PURPOSE                                                  │
//! │                                                                         │
//! │  divide / percentage  →  round half to even                            │
//! │    600 / 21 = 28.571  → 29                                              │
//! │    5 / 2    = 2.5     → 2   (2 is even)                                 │
//! │    7 / 2    = 3.5     → 4   (4 is even)                                 │
//! │                                                                         │
//! │  allocate             →  floor                                          │
//! │    1003 × 50 / 100 = 501.5 → 501                                        │
//! │    Every share is ≤ its exact value, so Σ shares ≤ total and the       │
//! │    leftover is a whole number of minor units to hand out.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All intermediate products are computed in `i128`, so `amount × percent`
//! cannot overflow before the division brings it back into range. Only the
//! final result must fit in `i64`.
//!
//! ## Usage
//! ```rust
//! use tally_core::Amount;
//!
//! let amount = Amount::new(600);
//! assert_eq!(amount.divide(21).value(), 29);
//! assert_eq!(amount.divide(22).value(), 27);
//! assert_eq!(Amount::new(9100).percentage(34).value(), 3094);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use ts_rs::TS;

// =============================================================================
// Amount Type
// =============================================================================

/// A signed count of currency minor units.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values model refunds and debts
/// - **Single field tuple struct**: zero-cost over `i64`
/// - **Copy**: every operation returns a fresh value, nothing is mutated
///
/// Overflow in `+`, [`subtract`](Amount::subtract) and
/// [`multiply`](Amount::multiply) is a caller precondition. Use the
/// `checked_*` variants when inputs are untrusted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from a raw minor-unit count.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Amount(value)
    }

    /// Zero minor units.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
    }

    /// Returns the raw minor-unit count.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Amount(self.0.abs())
    }

    /// Returns the amount with its sign flipped.
    #[inline]
    pub const fn negate(&self) -> Self {
        Amount(-self.0)
    }

    /// Integer sum `self + other`. Same as the `+` operator, usable in
    /// `const` contexts.
    #[inline]
    pub const fn add(&self, other: Amount) -> Self {
        Amount(self.0 + other.0)
    }

    /// Integer difference `self - other`.
    #[inline]
    pub const fn subtract(&self, other: Amount) -> Self {
        Amount(self.0 - other.0)
    }

    /// Scales the amount by an integer.
    ///
    /// The product of two integers is already integral, so no rounding step
    /// changes the result.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Amount;
    ///
    /// assert_eq!(Amount::new(299).multiply(3).value(), 897);
    /// ```
    #[inline]
    pub const fn multiply(&self, multiplier: i64) -> Self {
        Amount(self.0 * multiplier)
    }

    /// Divides the amount, rounding half to even.
    ///
    /// ## Panics
    /// Panics when `divisor` is zero, or for `i64::MIN / -1`, exactly like
    /// integer division. Use [`checked_divide`](Amount::checked_divide) to get
    /// `None` instead.
    pub fn divide(&self, divisor: i64) -> Self {
        match self.checked_divide(divisor) {
            Some(amount) => amount,
            None if divisor == 0 => panic!("attempt to divide an Amount by zero"),
            None => panic!("attempt to divide an Amount with overflow"),
        }
    }

    /// `percent`% of the amount, i.e. `divide(multiply(percent), 100)`.
    ///
    /// Inherits banker's rounding from [`divide`](Amount::divide). The range of
    /// `percent` is checked by [`Money::percentage`](crate::Money::percentage);
    /// any value is accepted here.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Amount;
    ///
    /// // 50% of 5 cents is 2.5 → 2 (even)
    /// assert_eq!(Amount::new(5).percentage(50).value(), 2);
    /// // 50% of 7 cents is 3.5 → 4 (even)
    /// assert_eq!(Amount::new(7).percentage(50).value(), 4);
    /// ```
    pub fn percentage(&self, percent: i64) -> Self {
        let scaled = round_half_even(self.0 as i128 * percent as i128, 100);
        match i64::try_from(scaled) {
            Ok(value) => Amount(value),
            Err(_) => panic!("attempt to take a percentage of an Amount with overflow"),
        }
    }

    /// Floor of `self × ratio / total`: one share of a proportional split.
    ///
    /// Flooring guarantees that the shares of every ratio in a list never sum
    /// to more than the original amount. The leftover is handed out by
    /// [`Money::allocate`](crate::Money::allocate).
    ///
    /// ## Panics
    /// Panics when `total` is zero or the share does not fit in `i64`
    /// (which cannot happen while `0 <= ratio <= total`).
    pub fn allocate(&self, ratio: i64, total: i64) -> Self {
        match self.checked_allocate(ratio, total) {
            Some(amount) => amount,
            None if total == 0 => panic!("attempt to allocate an Amount over a zero total"),
            None => panic!("attempt to allocate an Amount with overflow"),
        }
    }

    // =========================================================================
    // Checked Variants
    // =========================================================================

    /// Sum, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Amount) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(value) => Some(Amount(value)),
            None => None,
        }
    }

    /// Difference, or `None` on overflow.
    #[inline]
    pub const fn checked_subtract(&self, other: Amount) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(value) => Some(Amount(value)),
            None => None,
        }
    }

    /// Product, or `None` on overflow.
    #[inline]
    pub const fn checked_multiply(&self, multiplier: i64) -> Option<Self> {
        match self.0.checked_mul(multiplier) {
            Some(value) => Some(Amount(value)),
            None => None,
        }
    }

    /// Banker's-rounded quotient, or `None` for a zero divisor or overflow.
    pub fn checked_divide(&self, divisor: i64) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let quotient = round_half_even(self.0 as i128, divisor as i128);
        i64::try_from(quotient).ok().map(Amount)
    }

    /// Floored share, or `None` for a zero total or overflow.
    pub fn checked_allocate(&self, ratio: i64, total: i64) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let share = floor_div(self.0 as i128 * ratio as i128, total as i128);
        i64::try_from(share).ok().map(Amount)
    }
}

// =============================================================================
// Integer Rounding
// =============================================================================

/// Divides `numerator` by `denominator`, rounding exact halves to the nearest
/// even integer. Pure integer arithmetic, no floating point.
///
/// `denominator` must be non-zero.
///
/// ## Example
/// ```rust
/// use tally_core::amount::round_half_even;
///
/// assert_eq!(round_half_even(5, 2), 2);
/// assert_eq!(round_half_even(7, 2), 4);
/// assert_eq!(round_half_even(-5, 2), -2);
/// assert_eq!(round_half_even(600, 21), 29);
/// ```
pub fn round_half_even(numerator: i128, denominator: i128) -> i128 {
    let (n, d) = if denominator < 0 {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };

    // Truncates toward zero; the remainder carries the sign of n.
    let quotient = n / d;
    let twice_remainder = (n % d).abs() * 2;

    if twice_remainder > d || (twice_remainder == d && quotient % 2 != 0) {
        quotient + n.signum()
    } else {
        quotient
    }
}

/// Divides rounding toward negative infinity. `denominator` must be non-zero.
///
/// ```rust
/// use tally_core::amount::floor_div;
///
/// assert_eq!(floor_div(7, 2), 3);
/// assert_eq!(floor_div(-7, 2), -4);
/// assert_eq!(floor_div(7, -2), -4);
/// ```
pub fn floor_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    if numerator % denominator != 0 && ((numerator < 0) != (denominator < 0)) {
        quotient - 1
    } else {
        quotient
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display prints the raw minor-unit count.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Addition of two amounts. Amounts carry no currency, so this cannot fail.
impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<i64> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, multiplier: i64) -> Self {
        self.multiply(multiplier)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, amount| acc + amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The result is the nearest integer, and exact halves land on even.
        #[test]
        fn round_half_even_is_nearest_and_unbiased(
            n in -1_000_000_000i128..1_000_000_000i128,
            d in 1i128..10_000i128,
        ) {
            let q = round_half_even(n, d);
            let distance_twice = (q * d - n).abs() * 2;

            prop_assert!(distance_twice <= d);
            if distance_twice == d {
                prop_assert_eq!(q % 2, 0);
            }
        }

        #[test]
        fn floor_div_never_exceeds_exact_quotient(
            n in -1_000_000_000i128..1_000_000_000i128,
            d in 1i128..10_000i128,
        ) {
            let q = floor_div(n, d);
            prop_assert!(q * d <= n);
            prop_assert!(n - q * d < d);
        }
    }
}
