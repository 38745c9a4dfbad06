//! # Weight Value Object
//!
//! Shipment weight in kilograms, validated against the service limit.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::value_objects::weight::Weight;
//! use rust_decimal::Decimal;
//!
//! let weight = Weight::new(Decimal::new(1000, 0)).unwrap();
//! assert_eq!(weight.kilograms(), Decimal::new(1000, 0));
//!
//! assert!(Weight::new(Decimal::new(10000001, 4)).is_err());
//! assert!(Weight::from_f64(f64::NAN).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::enums::WeightUnit;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heaviest shipment that can be quoted, in kilograms.
pub const MAX_WEIGHT_KG: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// A shipment weight in kilograms.
///
/// # Invariants
///
/// - `0 <= kilograms <= MAX_WEIGHT_KG`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Weight(Decimal);

impl Weight {
    /// Creates a weight, rejecting values outside `[0, MAX_WEIGHT_KG]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` for negative or overweight values.
    pub fn new(kilograms: Decimal) -> DomainResult<Self> {
        if kilograms.is_sign_negative() && !kilograms.is_zero() {
            return Err(DomainError::invalid_input(
                "weight_kg",
                format!("{kilograms} must not be negative"),
            ));
        }
        if kilograms > MAX_WEIGHT_KG {
            return Err(DomainError::invalid_input(
                "weight_kg",
                format!("{kilograms} exceeds the maximum of {MAX_WEIGHT_KG} kg"),
            ));
        }
        Ok(Self(kilograms))
    }

    /// Creates a weight from a floating point value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the value is NaN, infinite or
    /// outside the accepted range.
    pub fn from_f64(kilograms: f64) -> DomainResult<Self> {
        if !kilograms.is_finite() {
            return Err(DomainError::invalid_input(
                "weight_kg",
                "must be a finite number",
            ));
        }
        let value = Decimal::from_f64(kilograms)
            .ok_or_else(|| DomainError::invalid_input("weight_kg", "not representable"))?;
        Self::new(value)
    }

    /// Creates a weight from a value in `unit`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the converted weight is out of range.
    pub fn from_unit(value: Decimal, unit: WeightUnit) -> DomainResult<Self> {
        Self::new(convert_weight(value, unit, WeightUnit::Kg)?)
    }

    /// Returns the weight in kilograms.
    #[inline]
    #[must_use]
    pub const fn kilograms(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Weight {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for Decimal {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0.normalize())
    }
}

/// Converts `value` between weight units.
///
/// Goes through kilograms. The result is not range checked.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` on arithmetic overflow.
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::enums::WeightUnit;
/// use ship_quote::domain::value_objects::weight::convert_weight;
/// use rust_decimal::Decimal;
///
/// let kg = convert_weight(Decimal::new(2500, 0), WeightUnit::G, WeightUnit::Kg).unwrap();
/// assert_eq!(kg, Decimal::new(25, 1));
/// ```
pub fn convert_weight(value: Decimal, from: WeightUnit, to: WeightUnit) -> DomainResult<Decimal> {
    if from == to {
        return Ok(value);
    }
    let kilograms = value.safe_mul(from.kilograms_per_unit())?;
    Ok(kilograms.safe_div(to.kilograms_per_unit())?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn accepts_zero() {
            assert_eq!(Weight::new(Decimal::ZERO).unwrap().kilograms(), Decimal::ZERO);
        }

        #[test]
        fn accepts_limit() {
            assert!(Weight::new(MAX_WEIGHT_KG).is_ok());
        }

        #[test]
        fn rejects_just_over_limit() {
            let err = Weight::new(Decimal::new(10_000_001, 4)).unwrap_err();
            assert!(err.is_invalid_input());
            assert_eq!(err.field(), "weight_kg");
        }

        #[test]
        fn rejects_negative() {
            assert!(Weight::new(Decimal::new(-1, 2)).is_err());
        }

        #[test]
        fn from_f64_rejects_non_finite() {
            assert!(Weight::from_f64(f64::NAN).is_err());
            assert!(Weight::from_f64(f64::INFINITY).is_err());
            assert!(Weight::from_f64(f64::NEG_INFINITY).is_err());
        }

        #[test]
        fn from_f64_accepts_fractional() {
            let weight = Weight::from_f64(2.5).unwrap();
            assert_eq!(weight.kilograms(), Decimal::new(25, 1));
        }

        #[test]
        fn from_unit_converts_pounds() {
            let weight = Weight::from_unit(Decimal::new(10, 0), WeightUnit::Lb).unwrap();
            assert_eq!(weight.kilograms(), Decimal::new(453592, 5));
        }

        #[test]
        fn from_unit_rejects_overweight_after_conversion() {
            assert!(Weight::from_unit(Decimal::new(2500, 0), WeightUnit::Lb).is_err());
        }
    }

    mod conversion {
        use super::*;

        #[test]
        fn same_unit_is_identity() {
            let value = Decimal::new(1234, 2);
            assert_eq!(
                convert_weight(value, WeightUnit::Oz, WeightUnit::Oz).unwrap(),
                value
            );
        }

        #[test]
        fn kilograms_to_grams() {
            let grams = convert_weight(Decimal::new(3, 0), WeightUnit::Kg, WeightUnit::G).unwrap();
            assert_eq!(grams, Decimal::new(3000, 0));
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn roundtrip_as_string() {
            let weight = Weight::new(Decimal::new(125, 1)).unwrap();
            let json = serde_json::to_string(&weight).unwrap();
            assert_eq!(json, "\"12.5\"");
            let back: Weight = serde_json::from_str(&json).unwrap();
            assert_eq!(back, weight);
        }

        #[test]
        fn deserialize_rejects_out_of_range() {
            assert!(serde_json::from_str::<Weight>("\"1001\"").is_err());
        }
    }

    #[test]
    fn display_appends_unit() {
        let weight = Weight::new(Decimal::new(1050, 2)).unwrap();
        assert_eq!(weight.to_string(), "10.5 kg");
    }
}
