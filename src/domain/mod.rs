//! # Domain Layer
//!
//! Pure pricing core: value objects, the shipment request and quote entities,
//! and the [`services::QuoteEngine`] that maps one onto the other.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
