//! # Rate Tables
//!
//! Fixed rate card for service tiers and package categories.
//!
//! | tier      | base  | per kg | surcharge |
//! |-----------|-------|--------|-----------|
//! | standard  | 5.99  | 2.50   | 1.0       |
//! | express   | 12.99 | 4.00   | 1.5       |
//! | overnight | 25.99 | 6.50   | 2.0       |
//!
//! | category  | handling | risk |
//! |-----------|----------|------|
//! | document  | 0.00     | 1.0  |
//! | package   | 2.50     | 1.0  |
//! | fragile   | 8.00     | 1.3  |
//! | hazardous | 15.00    | 1.8  |
//!
//! The tables are immutable and built into the binary.

use crate::domain::value_objects::enums::{PackageCategory, ServiceTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rate card entry for a [`ServiceTier`].
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::enums::ServiceTier;
/// use rust_decimal::Decimal;
///
/// let rate = ServiceTier::Standard.rate();
/// assert_eq!(rate.base_fee(), Decimal::new(599, 2));
/// assert_eq!(rate.per_kg_fee(), Decimal::new(250, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRate {
    tier: ServiceTier,
    base_fee: Decimal,
    per_kg_fee: Decimal,
    surcharge_multiplier: Decimal,
    transit_days: u32,
}

impl ServiceRate {
    /// Returns the rate card entry for `tier`.
    #[must_use]
    pub fn for_tier(tier: ServiceTier) -> Self {
        let (base_fee, per_kg_fee, surcharge_multiplier) = match tier {
            ServiceTier::Standard => (Decimal::new(599, 2), Decimal::new(250, 2), Decimal::ONE),
            ServiceTier::Express => (
                Decimal::new(1299, 2),
                Decimal::new(400, 2),
                Decimal::new(15, 1),
            ),
            ServiceTier::Overnight => (
                Decimal::new(2599, 2),
                Decimal::new(650, 2),
                Decimal::new(20, 1),
            ),
        };
        Self {
            tier,
            base_fee,
            per_kg_fee,
            surcharge_multiplier,
            transit_days: tier.transit_days(),
        }
    }

    /// Returns the tier this entry belongs to.
    #[inline]
    #[must_use]
    pub const fn tier(&self) -> ServiceTier {
        self.tier
    }

    /// Flat fee charged for every shipment on this tier.
    #[inline]
    #[must_use]
    pub const fn base_fee(&self) -> Decimal {
        self.base_fee
    }

    /// Fee per kilogram.
    #[inline]
    #[must_use]
    pub const fn per_kg_fee(&self) -> Decimal {
        self.per_kg_fee
    }

    /// Tier surcharge multiplier.
    ///
    /// Published on the rate card but not part of the pricing formula; only
    /// the package category's risk multiplier scales the subtotal.
    #[inline]
    #[must_use]
    pub const fn surcharge_multiplier(&self) -> Decimal {
        self.surcharge_multiplier
    }

    /// Transit days used for delivery estimation.
    #[inline]
    #[must_use]
    pub const fn transit_days(&self) -> u32 {
        self.transit_days
    }
}

impl fmt::Display for ServiceRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ServiceRate({}: base={} per_kg={} surcharge={}x days={})",
            self.tier, self.base_fee, self.per_kg_fee, self.surcharge_multiplier, self.transit_days
        )
    }
}

/// Rate card entry for a [`PackageCategory`].
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::enums::PackageCategory;
/// use rust_decimal::Decimal;
///
/// let rate = PackageCategory::Hazardous.rate();
/// assert_eq!(rate.handling_fee(), Decimal::new(15, 0));
/// assert_eq!(rate.risk_multiplier(), Decimal::new(18, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRate {
    category: PackageCategory,
    handling_fee: Decimal,
    risk_multiplier: Decimal,
}

impl CategoryRate {
    /// Returns the rate card entry for `category`.
    #[must_use]
    pub fn for_category(category: PackageCategory) -> Self {
        let (handling_fee, risk_multiplier) = match category {
            PackageCategory::Document => (Decimal::ZERO, Decimal::ONE),
            PackageCategory::Package => (Decimal::new(250, 2), Decimal::ONE),
            PackageCategory::Fragile => (Decimal::new(800, 2), Decimal::new(13, 1)),
            PackageCategory::Hazardous => (Decimal::new(1500, 2), Decimal::new(18, 1)),
        };
        Self {
            category,
            handling_fee,
            risk_multiplier,
        }
    }

    /// Returns the category this entry belongs to.
    #[inline]
    #[must_use]
    pub const fn category(&self) -> PackageCategory {
        self.category
    }

    /// Flat handling fee.
    #[inline]
    #[must_use]
    pub const fn handling_fee(&self) -> Decimal {
        self.handling_fee
    }

    /// Multiplier applied to base, weight and handling costs.
    #[inline]
    #[must_use]
    pub const fn risk_multiplier(&self) -> Decimal {
        self.risk_multiplier
    }
}

impl fmt::Display for CategoryRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CategoryRate({}: handling={} risk={}x)",
            self.category, self.handling_fee, self.risk_multiplier
        )
    }
}
