//! Unified error type for the domain layer.
//!
//! Field-value parsing never surfaces an error: blank or non-numeric inputs
//! degrade to zero by design. Errors exist only for structural misuse, such
//! as unparseable enum names or a malformed skill roster.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation failed (e.g., duplicate skill identifiers in a roster)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
