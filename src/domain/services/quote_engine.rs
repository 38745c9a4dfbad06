//! # Quote Engine
//!
//! Maps a [`ShipmentRequest`] onto a [`Quote`].
//!
//! # Pricing
//!
//! ```text
//! base      = tier.base_fee
//! weight    = weight_kg * tier.per_kg_fee
//! handling  = category.handling_fee
//! subtotal  = (base + weight + handling) * category.risk_multiplier
//! insurance = insured ? max(subtotal * 0.03, 5.00) : 0
//! total     = subtotal + insurance
//! ```
//!
//! The tier surcharge multiplier is not part of the formula. Amounts stay
//! exact; rounding to cents is left to presentation.
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
//!     Arc::new(SequenceEntropy::new(vec![0])),
//! );
//!
//! let request = ShipmentRequest::new(
//!     Decimal::new(5, 0),
//!     ServiceTier::Overnight,
//!     PackageCategory::Hazardous,
//!     false,
//! );
//! let quote = engine.compute_quote(&request).unwrap();
//!
//! assert_eq!(quote.subtotal().amount(), Decimal::new(133482, 3));
//! assert_eq!(quote.total_cost().to_string(), "133.48");
//! ```

use crate::domain::entities::{PriceBreakdown, Quote, ShipmentRequest};
use crate::domain::errors::DomainResult;
use crate::domain::services::ports::{Clock, EntropySource};
use crate::domain::value_objects::tracking_number::RANDOM_SUFFIX_LEN;
use crate::domain::value_objects::{
    DeliveryDate, Money, PackageCategory, ServiceTier, TrackingNumber, TrackingPrefix, Weight,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Insurance premium as a fraction of the subtotal (3%).
pub const INSURANCE_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Smallest insurance premium charged (5.00).
pub const INSURANCE_MINIMUM: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// Prices shipments against the fixed rate tables.
///
/// Holds no mutable state. Time and randomness come from the injected ports,
/// so two engines with equal ports produce equal quotes.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn EntropySource>,
    tracking_prefix: TrackingPrefix,
}

impl QuoteEngine {
    /// Creates an engine using the default `LC` tracking prefix.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, entropy: Arc<dyn EntropySource>) -> Self {
        Self {
            clock,
            entropy,
            tracking_prefix: TrackingPrefix::default(),
        }
    }

    /// Sets the tracking number prefix.
    #[must_use]
    pub fn with_tracking_prefix(mut self, prefix: TrackingPrefix) -> Self {
        self.tracking_prefix = prefix;
        self
    }

    /// Returns the configured tracking prefix.
    #[inline]
    #[must_use]
    pub fn tracking_prefix(&self) -> &TrackingPrefix {
        &self.tracking_prefix
    }

    /// Returns the engine's clock.
    #[inline]
    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Computes a full quote for `request`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the weight is negative or above
    /// 1000 kg.
    pub fn compute_quote(&self, request: &ShipmentRequest) -> DomainResult<Quote> {
        let quote = self.build_quote(request).inspect_err(|e| {
            tracing::warn!(error = %e, request = %request, "shipment request rejected");
        })?;

        tracing::debug!(
            tracking_number = %quote.tracking_number(),
            tier = %quote.service_tier(),
            category = %quote.package_category(),
            total = %quote.total_cost(),
            "quote computed"
        );
        Ok(quote)
    }

    fn build_quote(&self, request: &ShipmentRequest) -> DomainResult<Quote> {
        let weight = request.weight()?;
        let breakdown = price_shipment(
            weight,
            request.service_tier(),
            request.package_category(),
            request.insurance_requested(),
        )?;
        let delivery = self.estimate_delivery_date(request.service_tier())?;
        let tracking_number = self.generate_tracking_number()?;

        Ok(Quote::from_parts(
            breakdown,
            delivery,
            tracking_number,
            request.service_tier(),
            request.package_category(),
            weight,
        ))
    }

    /// Prices `request` without dating it or assigning a tracking number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the weight is out of range.
    pub fn price(&self, request: &ShipmentRequest) -> DomainResult<PriceBreakdown> {
        price_shipment(
            request.weight()?,
            request.service_tier(),
            request.package_category(),
            request.insurance_requested(),
        )
    }

    /// Estimates delivery for `tier` from the clock's current local date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the date cannot be represented.
    pub fn estimate_delivery_date(&self, tier: ServiceTier) -> DomainResult<DeliveryDate> {
        estimate_delivery_date(tier, self.clock.today())
    }

    /// Synthesizes a tracking number from the engine's ports.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the clock is before the epoch.
    pub fn generate_tracking_number(&self) -> DomainResult<TrackingNumber> {
        generate_tracking_number(
            &self.tracking_prefix,
            self.entropy.as_ref(),
            self.clock.as_ref(),
        )
    }
}

/// Applies the pricing formula.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` on arithmetic overflow, which cannot
/// happen for a validated [`Weight`].
pub fn price_shipment(
    weight: Weight,
    tier: ServiceTier,
    category: PackageCategory,
    insured: bool,
) -> DomainResult<PriceBreakdown> {
    let service = tier.rate();
    let handling = category.rate();

    let base_cost = Money::new(service.base_fee());
    let weight_cost = Money::new(weight.kilograms()).checked_mul(service.per_kg_fee())?;
    let handling_cost = Money::new(handling.handling_fee());

    let uninsured = PriceBreakdown::new(
        base_cost,
        weight_cost,
        handling_cost,
        handling.risk_multiplier(),
        Money::ZERO,
    )?;
    if !insured {
        return Ok(uninsured);
    }

    let premium = insurance_premium(uninsured.subtotal())?;
    PriceBreakdown::new(
        base_cost,
        weight_cost,
        handling_cost,
        handling.risk_multiplier(),
        premium,
    )
}

/// Insurance premium for `subtotal`: 3%, but never less than 5.00.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` on arithmetic overflow.
///
/// # Examples
///
/// ```
/// use ship_quote::domain::services::quote_engine::insurance_premium;
/// use ship_quote::domain::value_objects::Money;
/// use rust_decimal::Decimal;
///
/// let small = insurance_premium(Money::new(Decimal::new(3349, 2))).unwrap();
/// assert_eq!(small.amount(), Decimal::new(5, 0));
///
/// let large = insurance_premium(Money::new(Decimal::new(1000, 0))).unwrap();
/// assert_eq!(large.amount(), Decimal::new(30, 0));
/// ```
pub fn insurance_premium(subtotal: Money) -> DomainResult<Money> {
    let proportional = subtotal.checked_mul(INSURANCE_RATE)?;
    Ok(proportional.max(Money::new(INSURANCE_MINIMUM)))
}

/// Projects the delivery date for `tier` from `reference`.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the date cannot be represented.
pub fn estimate_delivery_date(tier: ServiceTier, reference: NaiveDate) -> DomainResult<DeliveryDate> {
    DeliveryDate::estimate(tier, reference)
}

/// Synthesizes a tracking number from `clock` and `entropy`.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the clock is before the epoch.
pub fn generate_tracking_number(
    prefix: &TrackingPrefix,
    entropy: &dyn EntropySource,
    clock: &dyn Clock,
) -> DomainResult<TrackingNumber> {
    let mut suffix = [0u8; RANDOM_SUFFIX_LEN];
    for digit in &mut suffix {
        *digit = entropy.next_base36();
    }
    TrackingNumber::from_parts(prefix, clock.now().timestamp_millis(), suffix)
}
