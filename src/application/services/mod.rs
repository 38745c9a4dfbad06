//! # Application Services
//!
//! Services that orchestrate the domain for a caller.
//!
//! - [`QuoteSession`]: form submission, last quote and export

pub mod quote_session;

pub use quote_session::QuoteSession;
