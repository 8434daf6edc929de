//! # Currency Registry
//!
//! The closed, read-only table of supported currencies.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  first lookup() ──► OnceLock builds HashMap<code, &'static Currency>   │
//! │                                                                         │
//! │  every later lookup() ──► uppercase the code ──► HashMap::get          │
//! │                                                                         │
//! │  No insert, no remove. Adding a currency means editing the table       │
//! │  below and shipping a new build. Concurrent readers need no locks.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::registry;
//!
//! let usd = registry::lookup("usd").unwrap();
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.decimal_places(), 2);
//!
//! assert!(registry::lookup("USX").is_err());
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};

// =============================================================================
// Well-Known Currencies
// =============================================================================
// These back the convenience constructors (`Money::usd`, ...), which cannot
// fail. They are the same entries the registry hands out.

/// United States dollar.
pub static USD: Currency = Currency::new("USD", 2, "$", '.', ',');

/// Euro.
pub static EUR: Currency = Currency::new("EUR", 2, "€", '.', ',');

/// Pound sterling.
pub static GBP: Currency = Currency::new("GBP", 2, "£", '.', ',');

/// Japanese yen (no minor unit).
pub static JPY: Currency = Currency::new("JPY", 0, "¥", '.', ',');

// =============================================================================
// Currency Table
// =============================================================================
//
// code, decimal places, symbol, decimal separator, grouping separator

static OTHER_CURRENCIES: [Currency; 28] = [
    Currency::new("AUD", 2, "A$", '.', ','),
    Currency::new("BHD", 3, "BD", '.', ','),
    Currency::new("BRL", 2, "R$", ',', '.'),
    Currency::new("CAD", 2, "CA$", '.', ','),
    Currency::new("CHF", 2, "CHF", '.', '\''),
    Currency::new("CLP", 0, "CLP$", ',', '.'),
    Currency::new("CNY", 2, "CN¥", '.', ','),
    Currency::new("CZK", 2, "Kč", ',', ' '),
    Currency::new("DKK", 2, "kr.", ',', '.'),
    Currency::new("HKD", 2, "HK$", '.', ','),
    Currency::new("HUF", 2, "Ft", ',', ' '),
    Currency::new("INR", 2, "₹", '.', ','),
    Currency::new("ISK", 0, "kr", ',', '.'),
    Currency::new("JOD", 3, "JD", '.', ','),
    Currency::new("KRW", 0, "₩", '.', ','),
    Currency::new("KWD", 3, "KD", '.', ','),
    Currency::new("MXN", 2, "MX$", '.', ','),
    Currency::new("NOK", 2, "kr", ',', ' '),
    Currency::new("NZD", 2, "NZ$", '.', ','),
    Currency::new("OMR", 3, "OMR", '.', ','),
    Currency::new("PLN", 2, "zł", ',', ' '),
    Currency::new("RUB", 2, "₽", ',', ' '),
    Currency::new("SEK", 2, "kr", ',', ' '),
    Currency::new("SGD", 2, "S$", '.', ','),
    Currency::new("TND", 3, "DT", '.', ','),
    Currency::new("TRY", 2, "₺", ',', '.'),
    Currency::new("VND", 0, "₫", ',', '.'),
    Currency::new("ZAR", 2, "R", ',', ' '),
];

static REGISTRY: OnceLock<HashMap<&'static str, &'static Currency>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, &'static Currency> {
    REGISTRY.get_or_init(|| {
        [&USD, &EUR, &GBP, &JPY]
            .into_iter()
            .chain(OTHER_CURRENCIES.iter())
            .map(|currency| (currency.code(), currency))
            .collect()
    })
}

// =============================================================================
// Lookup API
// =============================================================================

/// Looks up a currency by code, ignoring ASCII case.
///
/// ## Errors
/// `MoneyError::UnknownCurrency` carrying the code as given.
pub fn lookup(code: &str) -> MoneyResult<&'static Currency> {
    let normalized = code.to_ascii_uppercase();
    match table().get(normalized.as_str()) {
        Some(currency) => Ok(*currency),
        None => {
            debug!(code = %code, "Unknown currency code");
            Err(MoneyError::UnknownCurrency(code.to_string()))
        }
    }
}

/// Returns true if `code` names a registered currency (any case).
pub fn is_known(code: &str) -> bool {
    table().contains_key(code.to_ascii_uppercase().as_str())
}

/// Every registered currency, sorted by code.
pub fn all() -> Vec<&'static Currency> {
    let mut currencies: Vec<&'static Currency> = table().values().copied().collect();
    currencies.sort_by_key(|currency| currency.code());
    currencies
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("USD").unwrap().code(), "USD");
        assert_eq!(lookup("usd").unwrap().code(), "USD");
        assert_eq!(lookup("uSd").unwrap().code(), "USD");
    }

    #[test]
    fn test_lookup_unknown_currency() {
        assert_eq!(
            lookup("USX"),
            Err(MoneyError::UnknownCurrency("USX".to_string()))
        );
        assert!(lookup("").is_err());
        assert!(!is_known("XXX"));
    }

    #[test]
    fn test_lookup_returns_shared_entry() {
        let first = lookup("USD").unwrap();
        let second = lookup("usd").unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, &USD));
    }

    #[test]
    fn test_source_currencies_metadata() {
        for code in ["USD", "GBP", "EUR"] {
            let currency = lookup(code).unwrap();
            assert_eq!(currency.decimal_places(), 2);
            assert_eq!(currency.decimal_separator(), '.');
            assert_eq!(currency.grouping_separator(), ',');
        }
        assert_eq!(lookup("USD").unwrap().symbol(), "$");
        assert_eq!(lookup("GBP").unwrap().symbol(), "£");
        assert_eq!(lookup("EUR").unwrap().symbol(), "€");
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        let currencies = all();
        assert_eq!(currencies.len(), 32);

        let codes: Vec<&str> = currencies.iter().map(|c| c.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_table_codes_are_canonical() {
        for currency in all() {
            assert_eq!(currency.code().len(), 3);
            assert_eq!(currency.code(), currency.code().to_ascii_uppercase());
            assert!(currency.decimal_places() <= 3);
        }
    }
}
