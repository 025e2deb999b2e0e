//! Conversion errors
//!
//! Errors never crash the session. Each one carries a machine-readable code
//! and a severity that tells the presentation layer how loudly to report it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NO_MATCH: &str = "NO_MATCH";
    pub const UNKNOWN_CONVERSION: &str = "UNKNOWN_CONVERSION";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const INVALID_CATEGORY: &str = "INVALID_CATEGORY";
}

/// How a failure should surface to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing is shown
    Silent,
    /// Shown as a warning; the request was understood but cannot be served
    Warning,
    /// Shown as an error
    Error,
}

/// Error type for parsing and conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("input does not look like a conversion request")]
    NoMatch,

    #[error("no category contains both {from} and {to}")]
    UnknownConversion { from: String, to: String },

    #[error("unknown unit {unit} in {category}")]
    UnknownUnit { unit: String, category: String },

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unknown category: {0}")]
    InvalidCategory(String),
}

impl ConvertError {
    pub fn unknown_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnknownConversion { from: from.into(), to: to.into() }
    }

    pub fn unknown_unit(unit: impl Into<String>, category: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into(), category: category.into() }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::NoMatch => codes::NO_MATCH,
            ConvertError::UnknownConversion { .. } => codes::UNKNOWN_CONVERSION,
            ConvertError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            ConvertError::InvalidNumber(_) => codes::INVALID_NUMBER,
            ConvertError::InvalidCategory(_) => codes::INVALID_CATEGORY,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ConvertError::NoMatch => Severity::Silent,
            ConvertError::UnknownConversion { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Suggestion for fixing the input, if there is a useful one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConvertError::NoMatch => None,
            ConvertError::UnknownConversion { .. } => {
                Some("Both units must belong to the same category".to_string())
            }
            ConvertError::UnknownUnit { category, .. } => {
                Some(format!("Use :units {} to list valid units", category))
            }
            ConvertError::InvalidNumber(_) => Some("Enter a plain decimal number".to_string()),
            ConvertError::InvalidCategory(_) => Some("Use :categories to list categories".to_string()),
        }
    }
}
