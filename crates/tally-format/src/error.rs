//! # Format Error Types

use thiserror::Error;

use tally_core::MoneyError;

/// Result type alias for formatting and configuration.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// A config value was rejected.
    #[error("Invalid format configuration: {0}")]
    InvalidConfig(String),

    /// The config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// The config file could not be written.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Domain Errors
    // =========================================================================
    /// Building the value to format failed.
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        FormatError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for FormatError {
    fn from(err: toml::de::Error) -> Self {
        FormatError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for FormatError {
    fn from(err: toml::ser::Error) -> Self {
        FormatError::ConfigSaveFailed(err.to_string())
    }
}
