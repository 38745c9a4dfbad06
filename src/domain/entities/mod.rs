//! # Domain Entities
//!
//! - [`ShipmentRequest`]: what the customer wants shipped
//! - [`Quote`]: what it costs and when it arrives
//! - [`PriceBreakdown`]: the currency lines of a quote

pub mod quote;
pub mod shipment_request;

pub use quote::{PriceBreakdown, Quote};
pub use shipment_request::ShipmentRequest;
