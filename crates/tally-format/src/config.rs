//! # Format Configuration
//!
//! How money is laid out on screen: where the symbol goes, how negatives
//! look, whether digits are grouped.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TALLY_SYMBOL_POSITION=suffix                                       │
//! │     TALLY_NEGATIVE_STYLE=parentheses                                   │
//! │                                                                         │
//! │  2. TOML Config File (path supplied by the caller)                     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "$1,234.56" style: prefix symbol, minus sign, grouping on          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # format.toml
//! symbol_position = "suffix"   # prefix | suffix
//! symbol_spacing = true        # "12,50 €" instead of "12,50€"
//! negative_style = "minus"     # minus | parentheses
//! show_code = false            # append " EUR"
//! grouping = true              # "1,234" instead of "1234"
//! group_size = 3               # digits per group
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{FormatError, FormatResult};

// =============================================================================
// Symbol Position
// =============================================================================

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `$1,234.56`
    #[default]
    Prefix,

    /// `1.234,56€`
    Suffix,
}

impl std::fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolPosition::Prefix => write!(f, "prefix"),
            SymbolPosition::Suffix => write!(f, "suffix"),
        }
    }
}

impl std::str::FromStr for SymbolPosition {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefix" | "before" => Ok(SymbolPosition::Prefix),
            "suffix" | "after" => Ok(SymbolPosition::Suffix),
            other => Err(FormatError::InvalidConfig(format!(
                "Unknown symbol position: '{}'. Valid options: prefix, suffix",
                other
            ))),
        }
    }
}

// =============================================================================
// Negative Style
// =============================================================================

/// How negative amounts are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    /// `-$1.00`
    #[default]
    Minus,

    /// `($1.00)`, the accounting convention.
    Parentheses,
}

impl std::fmt::Display for NegativeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NegativeStyle::Minus => write!(f, "minus"),
            NegativeStyle::Parentheses => write!(f, "parentheses"),
        }
    }
}

impl std::str::FromStr for NegativeStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minus" | "sign" => Ok(NegativeStyle::Minus),
            "parentheses" | "paren" | "accounting" => Ok(NegativeStyle::Parentheses),
            other => Err(FormatError::InvalidConfig(format!(
                "Unknown negative style: '{}'. Valid options: minus, parentheses",
                other
            ))),
        }
    }
}

// =============================================================================
// Format Config
// =============================================================================

/// Layout options for [`CurrencyFormatter`](crate::CurrencyFormatter).
///
/// Separators and decimal places always come from the currency itself; this
/// only controls the surrounding layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub symbol_position: SymbolPosition,

    /// Put a space between the symbol and the number.
    #[serde(default)]
    pub symbol_spacing: bool,

    #[serde(default)]
    pub negative_style: NegativeStyle,

    /// Append the ISO code after the number (`$1.00 USD`).
    #[serde(default)]
    pub show_code: bool,

    /// Insert the currency's grouping separator every `group_size` digits.
    #[serde(default = "default_true")]
    pub grouping: bool,

    /// Digits per group when grouping is on.
    #[serde(default = "default_group_size")]
    pub group_size: usize,
}

fn default_true() -> bool {
    true
}

fn default_group_size() -> usize {
    3
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            symbol_position: SymbolPosition::default(),
            symbol_spacing: false,
            negative_style: NegativeStyle::default(),
            show_code: false,
            grouping: default_true(),
            group_size: default_group_size(),
        }
    }
}

impl FormatConfig {
    /// Loads configuration: defaults, then the TOML file, then environment.
    ///
    /// A path that does not exist is not an error; defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> FormatResult<Self> {
        Self::load_with(config_path, env_var)
    }

    /// Same as [`load`](FormatConfig::load), with overrides read from
    /// `lookup` instead of the process environment.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> FormatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading format config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration, falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load format config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration as pretty TOML.
    pub fn save(&self, config_path: PathBuf) -> FormatResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FormatError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .map_err(|e| FormatError::ConfigSaveFailed(e.to_string()))?;

        info!(path = ?config_path, "Format config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> FormatResult<()> {
        if self.group_size == 0 {
            return Err(FormatError::InvalidConfig(
                "group_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies overrides from any key/value source (the environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("TALLY_SYMBOL_POSITION") {
            match value.parse() {
                Ok(position) => {
                    debug!(position = %value, "Overriding symbol position from environment");
                    self.symbol_position = position;
                }
                Err(_) => warn!(position = %value, "Unknown symbol position in environment"),
            }
        }

        if let Some(value) = lookup("TALLY_NEGATIVE_STYLE") {
            match value.parse() {
                Ok(style) => {
                    debug!(style = %value, "Overriding negative style from environment");
                    self.negative_style = style;
                }
                Err(_) => warn!(style = %value, "Unknown negative style in environment"),
            }
        }

        if let Some(value) = lookup("TALLY_SYMBOL_SPACING") {
            if let Some(flag) = parse_flag("TALLY_SYMBOL_SPACING", &value) {
                self.symbol_spacing = flag;
            }
        }

        if let Some(value) = lookup("TALLY_SHOW_CODE") {
            if let Some(flag) = parse_flag("TALLY_SHOW_CODE", &value) {
                self.show_code = flag;
            }
        }

        if let Some(value) = lookup("TALLY_GROUPING") {
            if let Some(flag) = parse_flag("TALLY_GROUPING", &value) {
                self.grouping = flag;
            }
        }

        if let Some(value) = lookup("TALLY_GROUP_SIZE") {
            match value.trim().parse::<usize>() {
                Ok(size) => {
                    debug!(size, "Overriding group size from environment");
                    self.group_size = size;
                }
                Err(_) => warn!(size = %value, "Invalid group size in environment"),
            }
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_flag(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!(key, value, "Ignoring non-boolean value in environment");
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.symbol_position, SymbolPosition::Prefix);
        assert_eq!(config.negative_style, NegativeStyle::Minus);
        assert!(config.grouping);
        assert!(!config.symbol_spacing);
        assert!(!config.show_code);
        assert_eq!(config.group_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_group_size_is_rejected() {
        let config = FormatConfig {
            group_size: 0,
            ..FormatConfig::default()
        };
        assert!(matches!(config.validate(), Err(FormatError::InvalidConfig(_))));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("SUFFIX".parse::<SymbolPosition>().unwrap(), SymbolPosition::Suffix);
        assert_eq!("before".parse::<SymbolPosition>().unwrap(), SymbolPosition::Prefix);
        assert_eq!(
            "accounting".parse::<NegativeStyle>().unwrap(),
            NegativeStyle::Parentheses
        );
        assert!(matches!(
            "sideways".parse::<SymbolPosition>(),
            Err(FormatError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = FormatConfig::default();
        config.apply_overrides(overrides(&[
            ("TALLY_SYMBOL_POSITION", "suffix"),
            ("TALLY_NEGATIVE_STYLE", "parentheses"),
            ("TALLY_SYMBOL_SPACING", "yes"),
            ("TALLY_SHOW_CODE", "1"),
            ("TALLY_GROUPING", "off"),
            ("TALLY_GROUP_SIZE", "4"),
        ]));

        assert_eq!(config.symbol_position, SymbolPosition::Suffix);
        assert_eq!(config.negative_style, NegativeStyle::Parentheses);
        assert!(config.symbol_spacing);
        assert!(config.show_code);
        assert!(!config.grouping);
        assert_eq!(config.group_size, 4);
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let mut config = FormatConfig::default();
        config.apply_overrides(overrides(&[
            ("TALLY_SYMBOL_POSITION", "middle"),
            ("TALLY_GROUPING", "maybe"),
        ]));
        assert_eq!(config, FormatConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: FormatConfig = toml::from_str("symbol_position = \"suffix\"").unwrap();
        assert_eq!(config.symbol_position, SymbolPosition::Suffix);
        assert!(config.grouping);
        assert_eq!(config.negative_style, NegativeStyle::Minus);
    }

    #[test]
    fn test_config_serialization() {
        let config = FormatConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("symbol_position = \"prefix\""));
        assert!(toml_str.contains("grouping = true"));
    }
}
