//! Builder configuration.

use crate::error::QbResult;
use serde::Deserialize;

/// How bound-argument placeholders are written into the SQL text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?` for every argument (JDBC / SQLite / MySQL style).
    #[default]
    Question,
    /// `$1, $2, ...` numbered left to right across the whole statement (PostgreSQL).
    Numbered,
}

impl PlaceholderStyle {
    /// Placeholder for the argument at 1-based position `index`.
    pub fn placeholder(self, index: usize) -> String {
        match self {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Numbered => format!("${}", index),
        }
    }
}

/// Configuration shared by the statement builders.
///
/// Defaults to `?` placeholders.
///
/// # Example
///
/// ```rust
/// use sqlqb::{PlaceholderStyle, QbConfig};
///
/// let config = QbConfig::from_toml_str(r#"placeholder = "numbered""#)?;
/// assert_eq!(config.placeholder, PlaceholderStyle::Numbered);
/// # Ok::<(), sqlqb::QbError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QbConfig {
    /// Placeholder style used when rendering bound arguments.
    pub placeholder: PlaceholderStyle,
}

impl QbConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a configuration using `$n` placeholders.
    pub fn postgres() -> Self {
        Self::new().with_placeholder(PlaceholderStyle::Numbered)
    }

    /// Set the placeholder style.
    pub fn with_placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder = style;
        self
    }

    /// Parse a configuration from a TOML document (or table section).
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(source: &str) -> QbResult<Self> {
        Ok(toml::from_str(source)?)
    }
}
