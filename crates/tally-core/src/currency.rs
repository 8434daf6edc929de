//! # Currency Module
//!
//! The static descriptor every [`Money`](crate::Money) value points at.
//!
//! ## Identity Is The Code
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Currency { code: "USD", places: 2, symbol: "$", '.', ',' }             │
//! │                                                                         │
//! │  Two descriptors are the SAME currency when their codes match,         │
//! │  even if symbol or separators differ (e.g. an older table version).    │
//! │  PartialEq, Eq and Hash all look at `code` only.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Descriptors live in the [`registry`](crate::registry) for the whole process
//! and are handed out as `&'static Currency`. Nothing mutates them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::registry;

// =============================================================================
// Currency Type
// =============================================================================

/// Display and precision metadata for one ISO 4217 currency.
#[derive(Debug, Clone)]
pub struct Currency {
    code: &'static str,
    decimal_places: u32,
    symbol: &'static str,
    decimal_separator: char,
    grouping_separator: char,
}

impl Currency {
    /// Builds a descriptor. Only the registry table calls this; codes are
    /// stored uppercase.
    pub(crate) const fn new(
        code: &'static str,
        decimal_places: u32,
        symbol: &'static str,
        decimal_separator: char,
        grouping_separator: char,
    ) -> Self {
        Currency {
            code,
            decimal_places,
            symbol,
            decimal_separator,
            grouping_separator,
        }
    }

    /// Canonical uppercase ISO code, e.g. `"USD"`.
    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Number of minor-unit digits: 2 for USD, 0 for JPY, 3 for KWD.
    #[inline]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    #[inline]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    #[inline]
    pub const fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// Minor units per major unit (`10^decimal_places`).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::registry;
    ///
    /// assert_eq!(registry::lookup("USD").unwrap().scale(), 100);
    /// assert_eq!(registry::lookup("JPY").unwrap().scale(), 1);
    /// assert_eq!(registry::lookup("KWD").unwrap().scale(), 1000);
    /// ```
    #[inline]
    pub const fn scale(&self) -> i64 {
        10_i64.pow(self.decimal_places)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Serializes as the bare code string.
impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

/// Deserializes a code string into the shared registry entry.
impl<'de> Deserialize<'de> for &'static Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        registry::lookup(&code).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
