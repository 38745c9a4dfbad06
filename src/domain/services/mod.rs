//! # Domain Services
//!
//! - [`quote_engine::QuoteEngine`]: prices shipment requests and assembles quotes
//! - [`ports`]: the clock and entropy seams the engine depends on

pub mod ports;
pub mod quote_engine;

pub use ports::{Clock, EntropySource, FixedClock, SequenceEntropy};
pub use quote_engine::{
    INSURANCE_MINIMUM, INSURANCE_RATE, QuoteEngine, estimate_delivery_date,
    generate_tracking_number, insurance_premium, price_shipment,
};
