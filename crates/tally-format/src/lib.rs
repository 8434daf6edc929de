//! # tally-format: Display Strings for Money
//!
//! Presentation layer over [`tally_core`]. Reads a value's integer amount and
//! its currency's symbol, separators and decimal places, and produces text.
//! Nothing here changes a value.
//!
//! ## Modules
//!
//! - [`formatter`] - `Format` trait and `CurrencyFormatter`
//! - [`config`] - Layout options, loaded from TOML and `TALLY_*` variables
//! - [`error`] - Format error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::Money;
//! use tally_format::{format_money, CurrencyFormatter, Format, FormatConfig, NegativeStyle};
//!
//! assert_eq!(format_money(&Money::usd(123456)), "$1,234.56");
//!
//! let accounting = CurrencyFormatter::new(FormatConfig {
//!     negative_style: NegativeStyle::Parentheses,
//!     ..FormatConfig::default()
//! });
//! assert_eq!(accounting.format(&Money::usd(-995)), "($9.95)");
//! ```

pub mod config;
pub mod error;
pub mod formatter;

pub use config::{FormatConfig, NegativeStyle, SymbolPosition};
pub use error::{FormatError, FormatResult};
pub use formatter::{format_amount, format_money, CurrencyFormatter, Format};
