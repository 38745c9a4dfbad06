//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! - [`ServiceTier`] - Delivery speed the customer pays for
//! - [`PackageCategory`] - What is being shipped, drives handling and risk
//! - [`WeightUnit`] - Units a weight can be entered in
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits. `FromStr` accepts exactly the
//! lowercase wire names; anything else is rejected, never mapped to a default.

use crate::domain::value_objects::rates::{CategoryRate, ServiceRate};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shipping service tier.
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::enums::ServiceTier;
///
/// let tier: ServiceTier = "express".parse().unwrap();
/// assert_eq!(tier, ServiceTier::Express);
/// assert_eq!(tier.transit_days(), 3);
/// assert_eq!(tier.to_string(), "express");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ServiceTier {
    /// Ground shipping, advertised as 5-7 business days.
    Standard = 0,
    /// Expedited shipping, advertised as 2-3 business days.
    Express = 1,
    /// Next-day delivery.
    Overnight = 2,
}

impl ServiceTier {
    /// All tiers, slowest first.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::Overnight];

    /// Returns the rate card entry for this tier.
    #[must_use]
    pub fn rate(self) -> ServiceRate {
        ServiceRate::for_tier(self)
    }

    /// Days added to the reference date to estimate delivery.
    ///
    /// These are midpoints of the advertised ranges and are not configurable.
    #[inline]
    #[must_use]
    pub const fn transit_days(self) -> u32 {
        match self {
            Self::Standard => 6,
            Self::Express => 3,
            Self::Overnight => 1,
        }
    }

    /// Returns the wire name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Overnight => "overnight",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            "overnight" => Ok(Self::Overnight),
            _ => Err(ParseEnumError::InvalidValue("ServiceTier", s.to_string())),
        }
    }
}

/// Package category.
///
/// Each category carries a flat handling fee and a risk multiplier applied to
/// the pre-insurance subtotal.
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::enums::PackageCategory;
///
/// let category: PackageCategory = "fragile".parse().unwrap();
/// assert!(category.requires_special_handling());
/// assert!("crate".parse::<PackageCategory>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PackageCategory {
    /// Paper documents and envelopes.
    Document = 0,
    /// Ordinary boxed goods.
    Package = 1,
    /// Breakable goods.
    Fragile = 2,
    /// Dangerous goods.
    Hazardous = 3,
}

impl PackageCategory {
    /// All categories.
    pub const ALL: [Self; 4] = [
        Self::Document,
        Self::Package,
        Self::Fragile,
        Self::Hazardous,
    ];

    /// Returns the rate card entry for this category.
    #[must_use]
    pub fn rate(self) -> CategoryRate {
        CategoryRate::for_category(self)
    }

    /// Returns true if this category is priced above the base risk.
    #[inline]
    #[must_use]
    pub const fn requires_special_handling(self) -> bool {
        matches!(self, Self::Fragile | Self::Hazardous)
    }

    /// Returns the wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Package => "package",
            Self::Fragile => "fragile",
            Self::Hazardous => "hazardous",
        }
    }
}

impl fmt::Display for PackageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(Self::Document),
            "package" => Ok(Self::Package),
            "fragile" => Ok(Self::Fragile),
            "hazardous" => Ok(Self::Hazardous),
            _ => Err(ParseEnumError::InvalidValue(
                "PackageCategory",
                s.to_string(),
            )),
        }
    }
}

/// Unit a weight is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms, the unit rates are expressed in.
    #[default]
    Kg,
    /// Avoirdupois pounds.
    Lb,
    /// Grams.
    G,
    /// Avoirdupois ounces.
    Oz,
}

impl WeightUnit {
    /// Kilograms per one of this unit.
    #[must_use]
    pub fn kilograms_per_unit(self) -> Decimal {
        match self {
            Self::Kg => Decimal::ONE,
            Self::Lb => Decimal::new(453_592, 6),
            Self::G => Decimal::new(1, 3),
            Self::Oz => Decimal::new(283_495, 7),
        }
    }

    /// Returns the unit symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
            Self::G => "g",
            Self::Oz => "oz",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Self::Kg),
            "lb" | "lbs" => Ok(Self::Lb),
            "g" => Ok(Self::G),
            "oz" => Ok(Self::Oz),
            _ => Err(ParseEnumError::InvalidValue("WeightUnit", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
