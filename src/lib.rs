//! # ship-quote
//!
//! Shipping cost quoting engine.
//!
//! Computes an itemized price quote, an estimated delivery date and a tracking
//! number for a shipment, using fixed in-memory rate tables for service tiers
//! and package categories.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ bin/ (shipquote CLI, export_schemas)          │
//! ├──────────────────────────────────────────────┤
//! │ application  ShipmentForm → QuoteSession      │
//! ├──────────────────────────────────────────────┤
//! │ domain       QuoteEngine, value objects       │
//! ├──────────────────────────────────────────────┤
//! │ infrastructure  config, telemetry, system     │
//! │                 clock and entropy             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use ship_quote::domain::entities::ShipmentRequest;
//! use ship_quote::domain::services::{FixedClock, QuoteEngine, SequenceEntropy};
//! use ship_quote::domain::value_objects::{PackageCategory, ServiceTier};
//! use rust_decimal::Decimal;
//!
//! let engine = QuoteEngine::new(
//!     Arc::new(FixedClock::from_ymd(2026, 10, 17).unwrap()),
//!     Arc::new(SequenceEntropy::new(vec![10, 11, 12, 13])),
//! );
//!
//! let request = ShipmentRequest::new(
//!     Decimal::new(10, 0),
//!     ServiceTier::Standard,
//!     PackageCategory::Package,
//!     false,
//! );
//!
//! let quote = engine.compute_quote(&request).unwrap();
//! assert_eq!(quote.total_cost().to_string(), "33.49");
//! assert_eq!(quote.estimated_delivery_date().to_string(), "Friday, October 23, 2026");
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
