//! # Data Transfer Objects
//!
//! Flat, presentation-ready records for handing a quote to other systems.
//!
//! Currency amounts are rounded to cents and rendered as strings so the
//! record reads the same in every consumer.

use crate::domain::entities::Quote;
use crate::domain::value_objects::{PackageCategory, ServiceTier, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Currency every quote is priced in.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Exported quote record.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ship_quote::application::dto::QuoteExport;
/// use ship_quote::domain::entities::ShipmentRequest;
/// use ship_quote::domain::services::{Clock, FixedClock, QuoteEngine, SequenceEntropy};
/// use ship_quote::domain::value_objects::{PackageCategory, ServiceTier};
/// use rust_decimal::Decimal;
///
/// let clock = Arc::new(FixedClock::from_ymd(2026, 10, 17).unwrap());
/// let engine = QuoteEngine::new(clock.clone(), Arc::new(SequenceEntropy::new(vec![0])));
/// let request = ShipmentRequest::new(
///     Decimal::new(10, 0),
///     ServiceTier::Standard,
///     PackageCategory::Package,
///     true,
/// );
/// let quote = engine.compute_quote(&request).unwrap();
///
/// let export = QuoteExport::from_quote(&quote, clock.now(), "USD");
/// assert_eq!(export.total_cost, "38.49");
/// assert_eq!(export.timestamp, "2026-10-17T12:00:00.000Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteExport {
    /// Tier base fee, 2 dp.
    pub base_cost: String,
    /// Weight charge, 2 dp.
    pub weight_cost: String,
    /// Category handling fee, 2 dp.
    pub handling_cost: String,
    /// Risk-adjusted subtotal, 2 dp.
    pub subtotal: String,
    /// Insurance premium, 2 dp.
    pub insurance_cost: String,
    /// Amount payable, 2 dp.
    pub total_cost: String,
    /// Estimated delivery date, e.g. `Friday, October 23, 2026`.
    pub estimated_delivery_date: String,
    /// Tracking number.
    pub tracking_number: String,
    /// Service tier.
    pub service_tier: ServiceTier,
    /// Package category.
    pub package_category: PackageCategory,
    /// Weight in kilograms.
    pub weight: String,
    /// Export time, ISO-8601 UTC.
    pub timestamp: String,
    /// Currency code.
    pub currency: String,
}

impl QuoteExport {
    /// Flattens `quote`, stamped with `exported_at` and `currency`.
    #[must_use]
    pub fn from_quote(quote: &Quote, exported_at: Timestamp, currency: impl Into<String>) -> Self {
        Self {
            base_cost: quote.base_cost().to_string(),
            weight_cost: quote.weight_cost().to_string(),
            handling_cost: quote.handling_cost().to_string(),
            subtotal: quote.subtotal().to_string(),
            insurance_cost: quote.insurance_cost().to_string(),
            total_cost: quote.total_cost().to_string(),
            estimated_delivery_date: quote.estimated_delivery_date().to_long_string(),
            tracking_number: quote.tracking_number().to_string(),
            service_tier: quote.service_tier(),
            package_category: quote.package_category(),
            weight: quote.weight().kilograms().normalize().to_string(),
            timestamp: exported_at.to_iso8601(),
            currency: currency.into(),
        }
    }
}
