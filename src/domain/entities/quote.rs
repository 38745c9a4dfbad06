//! # Quote Entity
//!
//! Itemized shipping quote produced by the quote engine.
//!
//! This module provides:
//! - [`PriceBreakdown`]: the six currency lines of a quote
//! - [`Quote`]: breakdown plus delivery estimate, tracking number and the
//!   echoed request parameters
//!
//! All amounts are exact. Rounding to cents happens when an amount is
//! displayed or exported.
//!
//! # Invariants
//!
//! ```text
//! subtotal = (base + weight + handling) * risk_multiplier
//! total    = subtotal + insurance
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    CheckedArithmetic, DeliveryDate, Money, PackageCategory, ServiceTier, TrackingNumber, Weight,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency lines of a quote, unrounded.
///
/// Deserialization recomputes subtotal and total from the lines and rejects
/// records where they disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PriceBreakdownRecord")]
pub struct PriceBreakdown {
    base_cost: Money,
    weight_cost: Money,
    handling_cost: Money,
    risk_multiplier: Decimal,
    subtotal: Money,
    insurance_cost: Money,
    total_cost: Money,
}

impl PriceBreakdown {
    /// Assembles a breakdown, deriving subtotal and total from the lines.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` on arithmetic overflow.
    pub fn new(
        base_cost: Money,
        weight_cost: Money,
        handling_cost: Money,
        risk_multiplier: Decimal,
        insurance_cost: Money,
    ) -> DomainResult<Self> {
        let subtotal = base_cost
            .checked_add(weight_cost)?
            .checked_add(handling_cost)?
            .checked_mul(risk_multiplier)?;
        let total_cost = subtotal.checked_add(insurance_cost)?;
        Ok(Self {
            base_cost,
            weight_cost,
            handling_cost,
            risk_multiplier,
            subtotal,
            insurance_cost,
            total_cost,
        })
    }

    /// Tier base fee.
    #[inline]
    #[must_use]
    pub const fn base_cost(&self) -> Money {
        self.base_cost
    }

    /// Weight times the tier per-kilogram fee.
    #[inline]
    #[must_use]
    pub const fn weight_cost(&self) -> Money {
        self.weight_cost
    }

    /// Category handling fee.
    #[inline]
    #[must_use]
    pub const fn handling_cost(&self) -> Money {
        self.handling_cost
    }

    /// Category risk multiplier that was applied.
    #[inline]
    #[must_use]
    pub const fn risk_multiplier(&self) -> Decimal {
        self.risk_multiplier
    }

    /// Risk-adjusted sum before insurance.
    #[inline]
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Insurance premium, zero when not requested.
    #[inline]
    #[must_use]
    pub const fn insurance_cost(&self) -> Money {
        self.insurance_cost
    }

    /// Amount payable.
    #[inline]
    #[must_use]
    pub const fn total_cost(&self) -> Money {
        self.total_cost
    }

    /// Returns true if subtotal and total agree with the individual lines.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let lines = self
            .base_cost
            .amount()
            .safe_add(self.weight_cost.amount())
            .and_then(|sum| sum.safe_add(self.handling_cost.amount()))
            .and_then(|sum| sum.safe_mul(self.risk_multiplier));
        let total = self
            .subtotal
            .amount()
            .safe_add(self.insurance_cost.amount());
        lines == Ok(self.subtotal.amount()) && total == Ok(self.total_cost.amount())
    }
}

/// Wire form of [`PriceBreakdown`], validated on conversion.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceBreakdownRecord {
    base_cost: Money,
    weight_cost: Money,
    handling_cost: Money,
    risk_multiplier: Decimal,
    subtotal: Money,
    insurance_cost: Money,
    total_cost: Money,
}

impl TryFrom<PriceBreakdownRecord> for PriceBreakdown {
    type Error = DomainError;

    fn try_from(record: PriceBreakdownRecord) -> Result<Self, Self::Error> {
        let breakdown = Self::new(
            record.base_cost,
            record.weight_cost,
            record.handling_cost,
            record.risk_multiplier,
            record.insurance_cost,
        )?;
        if breakdown.subtotal != record.subtotal || breakdown.total_cost != record.total_cost {
            return Err(DomainError::invalid_input(
                "price_breakdown",
                format!(
                    "subtotal {} and total {} do not match the itemized lines",
                    record.subtotal.amount(),
                    record.total_cost.amount()
                ),
            ));
        }
        Ok(breakdown)
    }
}

impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base={} weight={} handling={} x{} subtotal={} insurance={} total={}",
            self.base_cost,
            self.weight_cost,
            self.handling_cost,
            self.risk_multiplier.normalize(),
            self.subtotal,
            self.insurance_cost,
            self.total_cost
        )
    }
}

/// A shipping quote.
///
/// Built once per request by the quote engine and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    breakdown: PriceBreakdown,
    estimated_delivery_date: DeliveryDate,
    tracking_number: TrackingNumber,
    service_tier: ServiceTier,
    package_category: PackageCategory,
    weight: Weight,
}

impl Quote {
    /// Creates a quote from already computed parts.
    #[must_use]
    pub fn from_parts(
        breakdown: PriceBreakdown,
        estimated_delivery_date: DeliveryDate,
        tracking_number: TrackingNumber,
        service_tier: ServiceTier,
        package_category: PackageCategory,
        weight: Weight,
    ) -> Self {
        Self {
            breakdown,
            estimated_delivery_date,
            tracking_number,
            service_tier,
            package_category,
            weight,
        }
    }

    /// Returns the price breakdown.
    #[inline]
    #[must_use]
    pub fn breakdown(&self) -> &PriceBreakdown {
        &self.breakdown
    }

    /// Tier base fee.
    #[inline]
    #[must_use]
    pub fn base_cost(&self) -> Money {
        self.breakdown.base_cost()
    }

    /// Weight-based charge.
    #[inline]
    #[must_use]
    pub fn weight_cost(&self) -> Money {
        self.breakdown.weight_cost()
    }

    /// Category handling fee.
    #[inline]
    #[must_use]
    pub fn handling_cost(&self) -> Money {
        self.breakdown.handling_cost()
    }

    /// Risk-adjusted subtotal.
    #[inline]
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.breakdown.subtotal()
    }

    /// Insurance premium.
    #[inline]
    #[must_use]
    pub fn insurance_cost(&self) -> Money {
        self.breakdown.insurance_cost()
    }

    /// Amount payable.
    #[inline]
    #[must_use]
    pub fn total_cost(&self) -> Money {
        self.breakdown.total_cost()
    }

    /// Estimated delivery date.
    #[inline]
    #[must_use]
    pub fn estimated_delivery_date(&self) -> DeliveryDate {
        self.estimated_delivery_date
    }

    /// Tracking number.
    #[inline]
    #[must_use]
    pub fn tracking_number(&self) -> &TrackingNumber {
        &self.tracking_number
    }

    /// Service tier the quote was priced for.
    #[inline]
    #[must_use]
    pub fn service_tier(&self) -> ServiceTier {
        self.service_tier
    }

    /// Package category the quote was priced for.
    #[inline]
    #[must_use]
    pub fn package_category(&self) -> PackageCategory {
        self.package_category
    }

    /// Weight the quote was priced for.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns true if insurance is included.
    #[must_use]
    pub fn is_insured(&self) -> bool {
        !self.breakdown.insurance_cost().is_zero()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote({} {} {} total={} eta={})",
            self.tracking_number,
            self.service_tier,
            self.weight,
            self.total_cost(),
            self.estimated_delivery_date
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TrackingPrefix;
    use chrono::NaiveDate;

    fn money(units: i64, scale: u32) -> Money {
        Money::new(Decimal::new(units, scale))
    }

    fn sample_breakdown() -> PriceBreakdown {
        PriceBreakdown::new(
            money(2599, 2),
            money(3250, 2),
            money(15, 0),
            Decimal::new(18, 1),
            Money::ZERO,
        )
        .unwrap()
    }

    mod breakdown {
        use super::*;

        #[test]
        fn derives_subtotal_and_total() {
            let b = sample_breakdown();
            assert_eq!(b.subtotal().amount(), Decimal::new(133482, 3));
            assert_eq!(b.total_cost().amount(), Decimal::new(133482, 3));
            assert_eq!(b.subtotal().to_string(), "133.48");
        }

        #[test]
        fn is_consistent_after_construction() {
            assert!(sample_breakdown().is_consistent());
        }

        #[test]
        fn insurance_adds_to_total() {
            let b = PriceBreakdown::new(
                money(599, 2),
                money(25, 0),
                money(250, 2),
                Decimal::ONE,
                money(5, 0),
            )
            .unwrap();
            assert_eq!(b.subtotal().to_string(), "33.49");
            assert_eq!(b.total_cost().to_string(), "38.49");
        }

        #[test]
        fn overflow_is_rejected() {
            let err = PriceBreakdown::new(
                Money::new(Decimal::MAX),
                Money::new(Decimal::MAX),
                Money::ZERO,
                Decimal::ONE,
                Money::ZERO,
            )
            .unwrap_err();
            assert!(err.is_invalid_input());
        }

        #[test]
        fn deserialize_accepts_consistent_record() {
            let b = sample_breakdown();
            let json = serde_json::to_string(&b).unwrap();
            let back: PriceBreakdown = serde_json::from_str(&json).unwrap();
            assert_eq!(back, b);
        }

        #[test]
        fn deserialize_rejects_tampered_total() {
            let json = r#"{
                "baseCost": "5.99",
                "weightCost": "25.00",
                "handlingCost": "2.50",
                "riskMultiplier": "1.0",
                "subtotal": "33.49",
                "insuranceCost": "0",
                "totalCost": "0.01"
            }"#;
            let err = serde_json::from_str::<PriceBreakdown>(json).unwrap_err();
            assert!(err.to_string().contains("price_breakdown"));
        }

        #[test]
        fn deserialize_rejects_tampered_subtotal() {
            let json = r#"{
                "baseCost": "5.99",
                "weightCost": "25.00",
                "handlingCost": "2.50",
                "riskMultiplier": "1.3",
                "subtotal": "33.49",
                "insuranceCost": "0",
                "totalCost": "33.49"
            }"#;
            assert!(serde_json::from_str::<PriceBreakdown>(json).is_err());
        }

        #[test]
        fn display_lists_lines() {
            let s = sample_breakdown().to_string();
            assert!(s.contains("x1.8"));
            assert!(s.contains("total=133.48"));
        }
    }

    mod quote {
        use super::*;

        fn sample_quote() -> Quote {
            Quote::from_parts(
                sample_breakdown(),
                DeliveryDate::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()),
                TrackingNumber::from_parts(&TrackingPrefix::default(), 1_000, [1, 2, 3, 4])
                    .unwrap(),
                ServiceTier::Overnight,
                PackageCategory::Hazardous,
                Weight::new(Decimal::new(5, 0)).unwrap(),
            )
        }

        #[test]
        fn accessors_delegate_to_breakdown() {
            let q = sample_quote();
            assert_eq!(q.base_cost().to_string(), "25.99");
            assert_eq!(q.weight_cost().to_string(), "32.50");
            assert_eq!(q.handling_cost().to_string(), "15.00");
            assert_eq!(q.insurance_cost().to_string(), "0.00");
            assert_eq!(q.total_cost().to_string(), "133.48");
            assert!(!q.is_insured());
        }

        #[test]
        fn display_summarizes() {
            let s = sample_quote().to_string();
            assert!(s.starts_with("Quote(LC000010001234 overnight 5 kg"));
            assert!(s.contains("Sunday, October 18, 2026"));
        }

        #[test]
        fn serde_roundtrip() {
            let q = sample_quote();
            let json = serde_json::to_string(&q).unwrap();
            let back: Quote = serde_json::from_str(&json).unwrap();
            assert_eq!(back, q);
        }

        #[test]
        fn deserialize_rejects_inconsistent_breakdown() {
            let mut value = serde_json::to_value(sample_quote()).unwrap();
            value["breakdown"]["totalCost"] = serde_json::json!("0.01");
            assert!(serde_json::from_value::<Quote>(value).is_err());
        }
    }
}
