//! Unified error types for the domain layer
//!
//! Graph and scoring operations keep their own error enums so callers can tell
//! a per-item scoring failure apart from a malformed graph operation. This type
//! is the common currency for everything else (build validation, label parsing)
//! and absorbs the specialised errors when a caller does not care about the
//! distinction.

use thiserror::Error;

use crate::graph::GraphError;
use crate::scoring::ScoreError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., an attribute outside its allowed range)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Build allocation rule violated (point budget, tag count, trait slots)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl DomainError {
    /// Creates a validation error for values outside their allowed domain.
    ///
    /// # Example
    /// ```ignore
    /// if !(1..=10).contains(&value) {
    ///     return Err(DomainError::validation("Luck must be between 1 and 10"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant:
    ///
    /// ```ignore
    /// impl FromStr for EffectiveRange {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "Close range" => Ok(Self::Close),
    ///             _ => Err(DomainError::parse(format!("Unknown range: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}
