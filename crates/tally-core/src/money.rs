//! # Money Module
//!
//! Provides the `Money` type: an [`Amount`] of minor units tied to a
//! [`Currency`] from the registry.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Naive splitting:                                                       │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units + allocation                        │
//! │    1000 cents allocated [1, 1, 1] = [334, 333, 333]                    │
//! │    Σ = 1000, always                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Currency Rule
//! Every binary operation (add, subtract, equals, the four orderings)
//! compares currency codes first. A mismatch returns
//! [`MoneyError::CurrencyMismatch`] and nothing is computed. That is why
//! `Money` implements no `Add`/`Sub` operators: an operator cannot report the
//! failure.
//!
//! ## Usage
//! ```rust
//! use tally_core::Money;
//!
//! let a = Money::new(100, "USD").unwrap();
//! let b = Money::new(130, "usd").unwrap();
//! assert_eq!(a.add(&b).unwrap().amount(), 230);
//!
//! let parts = Money::usd(1003).allocate(&[50, 50]).unwrap();
//! let cents: Vec<i64> = parts.iter().map(|m| m.amount()).collect();
//! assert_eq!(cents, vec![502, 501]);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};
use tracing::debug;
use ts_rs::TS;

use crate::amount::Amount;
use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::registry;
use crate::validation::{validate_minor_units, validate_percentage, validate_ratios};

// =============================================================================
// Money Type
// =============================================================================

/// An immutable amount of money in a specific currency.
///
/// ## Design Decisions
/// - **Owns its `Amount`**: each operation builds a fresh one
/// - **Borrows its `Currency`**: `&'static` into the registry, shared by
///   every value in that currency
/// - **Copy**: two words, no heap, safe to share across threads
///
/// The derived `PartialEq` is plain structural equality (same code and same
/// amount). [`equals`](Money::equals) is the checked form that reports a
/// currency mismatch instead of answering `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoneySnapshot", try_from = "MoneySnapshot")]
pub struct Money {
    amount: Amount,
    currency: &'static Currency,
}

impl Money {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates money from a minor-unit count and a currency code.
    ///
    /// The code is looked up case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Money, MoneyError};
    ///
    /// let price = Money::new(1099, "usd").unwrap();
    /// assert_eq!(price.amount(), 1099);
    /// assert_eq!(price.currency().code(), "USD");
    ///
    /// assert!(matches!(Money::new(100, "USX"), Err(MoneyError::UnknownCurrency(_))));
    /// ```
    pub fn new(amount: i64, currency_code: &str) -> MoneyResult<Self> {
        let currency = registry::lookup(currency_code)?;
        Ok(Money::from_amount(Amount::new(amount), currency))
    }

    /// Pairs an existing amount with a registry currency. Cannot fail.
    #[inline]
    pub const fn from_amount(amount: Amount, currency: &'static Currency) -> Self {
        Money { amount, currency }
    }

    /// Zero in the given currency.
    pub fn zero(currency_code: &str) -> MoneyResult<Self> {
        Money::new(0, currency_code)
    }

    /// Creates money from major and minor units, scaled by the currency's
    /// decimal places.
    ///
    /// As with a written price, only the major part carries the sign:
    /// `(-5, 50)` is -5.50, not -4.50. Amounts between -1 and 0 major units
    /// have no major sign to carry, so build those with [`Money::new`].
    ///
    /// ## Errors
    /// - `UnknownCurrency` for an unregistered code
    /// - `Validation(OutOfRange)` when `minor` is negative or does not fit
    ///   in the currency's decimal places (`150` cents, any minor for JPY)
    /// - `Overflow` when the scaled value leaves `i64`
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99, "USD").unwrap().amount(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50, "USD").unwrap().amount(), -550);
    /// assert_eq!(Money::from_major_minor(12, 345, "KWD").unwrap().amount(), 12_345);
    /// assert_eq!(Money::from_major_minor(500, 0, "JPY").unwrap().amount(), 500);
    /// ```
    pub fn from_major_minor(major: i64, minor: i64, currency_code: &str) -> MoneyResult<Self> {
        let currency = registry::lookup(currency_code)?;
        validate_minor_units(minor, currency.scale())?;
        let whole = major
            .checked_mul(currency.scale())
            .ok_or(MoneyError::Overflow)?;
        let value = if major < 0 {
            whole.checked_sub(minor)
        } else {
            whole.checked_add(minor)
        }
        .ok_or(MoneyError::Overflow)?;

        Ok(Money::from_amount(Amount::new(value), currency))
    }

    /// US dollars. The code is known at compile time, so this cannot fail.
    #[inline]
    pub fn usd(amount: i64) -> Self {
        Money::from_amount(Amount::new(amount), &registry::USD)
    }

    /// Euros.
    #[inline]
    pub fn eur(amount: i64) -> Self {
        Money::from_amount(Amount::new(amount), &registry::EUR)
    }

    /// Pounds sterling.
    #[inline]
    pub fn gbp(amount: i64) -> Self {
        Money::from_amount(Amount::new(amount), &registry::GBP)
    }

    /// Japanese yen.
    #[inline]
    pub fn jpy(amount: i64) -> Self {
        Money::from_amount(Amount::new(amount), &registry::JPY)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Raw minor-unit count.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount.value()
    }

    /// The underlying [`Amount`].
    #[inline]
    pub const fn as_amount(&self) -> Amount {
        self.amount
    }

    #[inline]
    pub const fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Whole major units, truncated toward zero.
    ///
    /// ```rust
    /// use tally_core::Money;
    ///
    /// assert_eq!(Money::usd(1099).major_part(), 10);
    /// assert_eq!(Money::usd(-550).major_part(), -5);
    /// ```
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.amount.value() / self.currency.scale()
    }

    /// Minor-unit remainder, always non-negative (`0..scale`).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.amount.value() % self.currency.scale()).abs()
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn abs(&self) -> Self {
        self.with_amount(self.amount.abs())
    }

    pub fn negate(&self) -> Self {
        self.with_amount(self.amount.negate())
    }

    /// True when both values use the same currency code.
    #[inline]
    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    fn with_amount(&self, amount: Amount) -> Self {
        Money::from_amount(amount, self.currency)
    }

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.same_currency(other) {
            return Ok(());
        }
        debug!(
            left = %self.currency.code(),
            right = %other.currency.code(),
            "Rejected operation across currencies"
        );
        Err(MoneyError::mismatch(
            self.currency.code(),
            other.currency.code(),
        ))
    }

    // =========================================================================
    // Binary Arithmetic
    // =========================================================================

    /// Sum of two values in the same currency.
    ///
    /// Overflow is a caller precondition; see [`checked_add`](Money::checked_add).
    pub fn add(&self, other: &Money) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(self.with_amount(self.amount + other.amount))
    }

    /// Difference of two values in the same currency.
    pub fn subtract(&self, other: &Money) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(self.with_amount(self.amount.subtract(other.amount)))
    }

    /// Like [`add`](Money::add), but overflow is `MoneyError::Overflow`.
    pub fn checked_add(&self, other: &Money) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// Like [`subtract`](Money::subtract), but overflow is `MoneyError::Overflow`.
    pub fn checked_subtract(&self, other: &Money) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_subtract(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Orders two values in the same currency.
    pub fn compare(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn equals(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn greater_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn less_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    // =========================================================================
    // Scaling
    // =========================================================================

    /// Multiplies by an integer. No currency check, no error path.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let line_total = Money::usd(299).multiply(3);
    /// assert_eq!(line_total.amount(), 897);
    /// ```
    pub fn multiply(&self, multiplier: i64) -> Self {
        self.with_amount(self.amount.multiply(multiplier))
    }

    /// Divides, rounding half to even.
    ///
    /// ## Panics
    /// Panics on a zero divisor, like integer division. Use
    /// [`checked_divide`](Money::checked_divide) for untrusted divisors.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// assert_eq!(Money::usd(600).divide(21).amount(), 29); // 28.57 → 29
    /// assert_eq!(Money::usd(600).divide(22).amount(), 27); // 27.27 → 27
    /// assert_eq!(Money::usd(5).divide(2).amount(), 2);     // 2.5 → 2 (even)
    /// ```
    pub fn divide(&self, divisor: i64) -> Self {
        self.with_amount(self.amount.divide(divisor))
    }

    pub fn checked_multiply(&self, multiplier: i64) -> MoneyResult<Self> {
        self.amount
            .checked_multiply(multiplier)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    pub fn checked_divide(&self, divisor: i64) -> MoneyResult<Self> {
        if divisor == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_divide(divisor)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// `percent`% of this value, banker's rounded.
    ///
    /// ## Errors
    /// `PercentageOutOfRange` unless `0 <= percent <= 100`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// assert_eq!(Money::usd(9100).percentage(34).unwrap().amount(), 3094);
    /// assert!(Money::usd(9100).percentage(101).is_err());
    /// ```
    pub fn percentage(&self, percent: i64) -> MoneyResult<Self> {
        validate_percentage(percent)?;
        Ok(self.with_amount(self.amount.percentage(percent)))
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Splits this value proportionally to `ratios`, losing nothing.
    ///
    /// ## Algorithm
    /// ```text
    /// 1003 allocated [50, 50]
    ///      │
    ///      ▼
    /// floor(1003 × 50 / 100) = 501, 501      Σ = 1002
    ///      │
    ///      ▼
    /// remainder = 1003 - 1002 = 1
    ///      │
    ///      ▼
    /// +1 to shares in ratio order → [502, 501]  Σ = 1003 ✓
    /// ```
    ///
    /// Each floored share is short of its exact value by less than one minor
    /// unit, so the remainder is smaller than the number of positive ratios
    /// and every extra unit lands on a different share. Zero ratios get zero.
    ///
    /// ## Errors
    /// - `EmptyRatioList` for `&[]`
    /// - `InvalidRatio` for a negative ratio
    /// - `Validation(MustBePositive)` when every ratio is zero
    pub fn allocate(&self, ratios: &[i64]) -> MoneyResult<Vec<Money>> {
        let total = validate_ratios(ratios)?;

        let mut shares: Vec<Amount> = ratios
            .iter()
            .map(|&ratio| self.amount.allocate(ratio, total))
            .collect();

        // Floored negative shares can sum below i64::MIN, so the sum and the
        // remainder are taken in i128. The remainder itself is below the
        // number of positive ratios.
        let allocated: i128 = shares.iter().map(|share| share.value() as i128).sum();
        let mut remainder = self.amount.value() as i128 - allocated;

        if remainder > 0 {
            debug!(
                amount = self.amount.value(),
                parts = ratios.len(),
                remainder = %remainder,
                "Distributing allocation remainder"
            );
        }

        for (share, _) in shares
            .iter_mut()
            .zip(ratios)
            .filter(|(_, &ratio)| ratio > 0)
        {
            if remainder == 0 {
                break;
            }
            *share = *share + Amount::new(1);
            remainder -= 1;
        }

        Ok(shares
            .into_iter()
            .map(|share| self.with_amount(share))
            .collect())
    }

    /// Splits into `parts` near-equal shares, earlier shares taking the extra
    /// minor units.
    ///
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let shares = Money::usd(1000).split(3).unwrap();
    /// let cents: Vec<i64> = shares.iter().map(|m| m.amount()).collect();
    /// assert_eq!(cents, vec![334, 333, 333]);
    /// ```
    pub fn split(&self, parts: usize) -> MoneyResult<Vec<Money>> {
        self.allocate(&vec![1; parts])
    }
}

// =============================================================================
// Snapshot (Wire Form)
// =============================================================================

/// Serialized shape of [`Money`]: `{"amount": 1099, "currency": "USD"}`.
///
/// Deserializing goes back through the registry, so an unknown code fails
/// with `UnknownCurrency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoneySnapshot {
    /// Minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
}

impl From<Money> for MoneySnapshot {
    fn from(money: Money) -> Self {
        MoneySnapshot {
            amount: money.amount(),
            currency: money.currency().code().to_string(),
        }
    }
}

impl TryFrom<MoneySnapshot> for Money {
    type Error = MoneyError;

    fn try_from(snapshot: MoneySnapshot) -> Result<Self, Self::Error> {
        Money::new(snapshot.amount, &snapshot.currency)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering: `12.34 USD`, `-0.05 EUR`, `500 JPY`.
///
/// ## Note
/// This ignores symbols and separators. Use `tally-format` for anything
/// shown to people.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.amount.value().unsigned_abs();
        let places = self.currency.decimal_places();

        if places == 0 {
            return write!(f, "{}{} {}", sign, magnitude, self.currency.code());
        }

        let scale = 10_u64.pow(places);
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            magnitude / scale,
            magnitude % scale,
            self.currency.code(),
            width = places as usize
        )
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

/// Multiplication by an integer (quantities). Same as [`Money::multiply`].
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, multiplier: i64) -> Self {
        self.multiply(multiplier)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
