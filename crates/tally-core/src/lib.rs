//! # tally-core: Fixed-Point Money
//!
//! Exact monetary arithmetic over integer minor units. No floats, no I/O,
//! no shared mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Layers                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 tally-format (presentation)                     │   │
//! │  │          "$1,234.56", symbol placement, TOML config             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads amount + currency metadata       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐     ┌───────────┐     ┌───────────────────┐    │   │
//! │  │   │   money   │ ──► │  amount   │     │     registry      │    │   │
//! │  │   │   Money   │     │  Amount   │     │ code → &Currency  │    │   │
//! │  │   └─────┬─────┘     └───────────┘     └─────────▲─────────┘    │   │
//! │  │         └──────────── lookup by code ───────────┘              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FLOATS • IMMUTABLE VALUES                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`amount`] - Integer minor units, banker's rounding, floor allocation
//! - [`currency`] - Currency descriptor (identity by code)
//! - [`registry`] - Static currency table and case-insensitive lookup
//! - [`money`] - Money: currency-checked operations on an Amount
//! - [`validation`] - Argument checks (percentage range, ratio lists)
//! - [`error`] - Domain error types
//!
//! ## Preconditions
//!
//! `divide` by zero and `i64` overflow in `add`, `subtract` and `multiply`
//! are caller preconditions, as with the primitive integer operators. The
//! `checked_*` methods turn them into `MoneyError::DivisionByZero` and
//! `MoneyError::Overflow`.
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Money, MoneyError};
//!
//! let price = Money::new(9100, "USD")?;
//! let deposit = price.percentage(34)?;
//! assert_eq!(deposit.amount(), 3094);
//!
//! let rest = price.subtract(&deposit)?;
//! let installments = rest.allocate(&[1, 1, 1])?;
//! let total: i64 = installments.iter().map(|m| m.amount()).sum();
//! assert_eq!(total, rest.amount());
//!
//! assert!(matches!(
//!     price.add(&Money::eur(1)),
//!     Err(MoneyError::CurrencyMismatch { .. })
//! ));
//! # Ok::<(), MoneyError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod currency;
pub mod error;
pub mod money;
pub mod registry;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use amount::Amount;
pub use currency::Currency;
pub use error::{MoneyError, MoneyResult, ValidationError};
pub use money::{Money, MoneySnapshot};
