//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)   - Rejected shipment input
//! ├── Validation(String)    - Form input that cannot be parsed
//! ├── Configuration(String) - Invalid or unreadable settings
//! └── Serialization(String) - Export encoding failures
//! ```
//!
//! # Examples
//!
//! ```
//! use ship_quote::application::error::ApplicationError;
//! use ship_quote::domain::errors::DomainError;
//!
//! let err = ApplicationError::validation("weight must be a number");
//! assert!(err.is_validation());
//!
//! let err: ApplicationError = DomainError::invalid_input("weight_kg", "too heavy").into();
//! assert!(err.is_invalid_input());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from pricing rules.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the domain rejected the input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_invalid_input())
    }
}

impl From<serde_json::Error> for ApplicationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
