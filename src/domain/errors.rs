//! # Domain Errors
//!
//! The domain has a single failure kind: the caller supplied input the engine
//! cannot price. Out-of-range weights, unknown tier or category names and
//! malformed dimensions all surface as [`DomainError::InvalidInput`].
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_input("weight_kg", "must not be negative");
//! assert!(err.is_invalid_input());
//! assert_eq!(err.to_string(), "invalid input: weight_kg: must not be negative");
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::enums::ParseEnumError;
use thiserror::Error;

/// Error raised by domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The supplied input is outside what the engine accepts.
    #[error("invalid input: {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },
}

impl DomainError {
    /// Creates an invalid input error for `field`.
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if this is an invalid input error.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns the name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

impl From<ParseEnumError> for DomainError {
    fn from(err: ParseEnumError) -> Self {
        let ParseEnumError::InvalidValue(kind, value) = err;
        let field = match kind {
            "ServiceTier" => "service_tier",
            "PackageCategory" => "package_category",
            "WeightUnit" => "weight_unit",
            _ => "value",
        };
        Self::invalid_input(field, format!("unknown {kind} '{value}'"))
    }
}

// Amounts are bounded by the weight limit, so overflow means the input was
// not validated before reaching the arithmetic.
impl From<ArithmeticError> for DomainError {
    fn from(err: ArithmeticError) -> Self {
        Self::invalid_input("amount", err.to_string())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
