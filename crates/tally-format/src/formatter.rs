//! # Money Formatter
//!
//! Turns a [`Money`] into the string a person reads.
//!
//! ## Layout
//! ```text
//! minor units 123456, USD { places: 2, symbol: "$", '.', ',' }
//!      │
//!      ▼
//! split at 2 places ──► whole 1234, fraction 56
//!      │
//!      ▼
//! group whole in triples ──► "1,234"
//!      │
//!      ▼
//! pad fraction to 2 digits, join, add symbol ──► "$1,234.56"
//! ```
//!
//! The formatter is a terminal consumer: it reads the integer amount and
//! the currency's metadata and never feeds anything back into arithmetic.

use tally_core::{registry, Currency, Money};

use crate::config::{FormatConfig, NegativeStyle, SymbolPosition};
use crate::error::FormatResult;

// =============================================================================
// Format Trait
// =============================================================================

/// Renders money for display.
pub trait Format {
    fn format(&self, money: &Money) -> String;
}

// =============================================================================
// Currency Formatter
// =============================================================================

/// Formats using the currency's own symbol, separators and decimal places,
/// laid out according to a [`FormatConfig`].
///
/// ## Example
/// ```rust
/// use tally_core::Money;
/// use tally_format::{CurrencyFormatter, Format};
///
/// let formatter = CurrencyFormatter::default();
/// assert_eq!(formatter.format(&Money::usd(123456)), "$1,234.56");
/// assert_eq!(formatter.format(&Money::jpy(1500)), "¥1,500");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    config: FormatConfig,
}

impl CurrencyFormatter {
    pub fn new(config: FormatConfig) -> Self {
        CurrencyFormatter { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Formats a raw minor-unit count in the given currency.
    pub fn format_minor_units(&self, amount: i64, currency: &Currency) -> String {
        let number = self.number(amount.unsigned_abs(), currency);

        let space = if self.config.symbol_spacing { " " } else { "" };
        let mut body = match self.config.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", currency.symbol(), space, number),
            SymbolPosition::Suffix => format!("{}{}{}", number, space, currency.symbol()),
        };

        if self.config.show_code {
            body.push(' ');
            body.push_str(currency.code());
        }

        if amount >= 0 {
            return body;
        }
        match self.config.negative_style {
            NegativeStyle::Minus => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        }
    }

    /// Digits and separators only, no sign and no symbol.
    fn number(&self, magnitude: u64, currency: &Currency) -> String {
        let places = currency.decimal_places();
        let scale = 10_u64.pow(places);

        let whole = (magnitude / scale).to_string();
        let whole = if self.config.grouping {
            group_digits(&whole, currency.grouping_separator(), self.config.group_size)
        } else {
            whole
        };

        if places == 0 {
            return whole;
        }

        format!(
            "{}{}{:0width$}",
            whole,
            currency.decimal_separator(),
            magnitude % scale,
            width = places as usize
        )
    }
}

impl Format for CurrencyFormatter {
    fn format(&self, money: &Money) -> String {
        self.format_minor_units(money.amount(), money.currency())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Inserts `separator` between groups of `size` digits, counting from the
/// right. A `size` of zero is treated as one.
///
/// ```rust
/// use tally_format::formatter::group_digits;
///
/// assert_eq!(group_digits("1234567", ',', 3), "1,234,567");
/// assert_eq!(group_digits("123", ',', 3), "123");
/// ```
pub fn group_digits(digits: &str, separator: char, size: usize) -> String {
    let size = size.max(1);
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + len / size);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

/// Formats with the default layout (`"$1,234.56"`).
pub fn format_money(money: &Money) -> String {
    CurrencyFormatter::default().format(money)
}

/// Formats a raw minor-unit count in the currency named by `currency_code`.
///
/// ## Errors
/// `FormatError::Money(UnknownCurrency)` when the code is not registered.
///
/// ```rust
/// use tally_format::format_amount;
///
/// assert_eq!(format_amount(123456, "usd").unwrap(), "$1,234.56");
/// assert!(format_amount(1, "USX").is_err());
/// ```
pub fn format_amount(amount: i64, currency_code: &str) -> FormatResult<String> {
    let currency = registry::lookup(currency_code)?;
    Ok(CurrencyFormatter::default().format_minor_units(amount, currency))
}

// =============================================================================
// Unit Tests
// =============================================================================
