//! # Application Layer
//!
//! Use cases on top of the pricing core: form validation, the per-user
//! quote session and the export record.

pub mod dto;
pub mod error;
pub mod form;
pub mod services;

pub use dto::QuoteExport;
pub use error::{ApplicationError, ApplicationResult};
pub use form::{ShipmentForm, clamp_weight};
pub use services::QuoteSession;
