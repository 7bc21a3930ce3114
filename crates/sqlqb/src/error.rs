//! Error types for sqlqb

use thiserror::Error;

/// Result type alias for builder operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types raised while composing statements
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QbError {
    /// A column was assigned a second value in the same INSERT/UPDATE
    #[error("Duplicate argument: column '{column}' already has a value; setting a column twice is not allowed")]
    DuplicateArgument { column: String },

    /// The builder cannot produce a statement in its current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl QbError {
    /// Create a duplicate argument error for a specific column
    pub fn duplicate_argument(column: impl Into<String>) -> Self {
        Self::DuplicateArgument {
            column: column.into(),
        }
    }

    /// Create an invalid operation error
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// Check if this is a duplicate argument error
    pub fn is_duplicate_argument(&self) -> bool {
        matches!(self, Self::DuplicateArgument { .. })
    }

    /// Check if this is an invalid operation error
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

impl From<toml::de::Error> for QbError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
