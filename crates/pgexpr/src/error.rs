//! Error types for pgexpr

use std::fmt::Display;
use thiserror::Error;

/// Result type alias for pgexpr operations
pub type ExprResult<T> = Result<T, ExprError>;

/// Errors raised while encoding values, decoding driver text, or building fragments.
///
/// None of these are transient: they point at a programming or data-integrity
/// bug and should be surfaced unchanged.
#[derive(Debug, Error)]
pub enum ExprError {
    /// An application value cannot be serialized to the expected textual form.
    #[error("Format error: {0}")]
    Format(String),

    /// Database-returned text does not match the expected grammar.
    #[error("Parse error on {input:?}: {message}")]
    Parse { input: String, message: String },

    /// Dimensionality declared on the column disagrees with the observed value.
    #[error("Dimension mismatch: column declares {expected}, value has {found}")]
    DimensionMismatch { expected: String, found: String },

    /// Validation error (identifiers, pagination, range ordering)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ExprError {
    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Create a parse error for the given input text
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: impl Display, found: impl Display) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is a dimension mismatch error
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
