//! # Shipment Request
//!
//! Normalized input to the quote engine.
//!
//! The request carries the raw weight as entered. Range checking happens when
//! the engine prices it ([`ShipmentRequest::weight`]), so an out-of-range
//! request can be built and then rejected with `InvalidInput`.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::entities::ShipmentRequest;
//! use ship_quote::domain::value_objects::{PackageCategory, ServiceTier};
//! use rust_decimal::Decimal;
//!
//! let request = ShipmentRequest::new(
//!     Decimal::new(5, 0),
//!     ServiceTier::Overnight,
//!     PackageCategory::Hazardous,
//!     false,
//! )
//! .with_dimensions("40x30x20".parse().unwrap());
//!
//! assert!(request.weight().is_ok());
//! assert_eq!(request.dimensions().unwrap().to_string(), "40x30x20");
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Dimensions, PackageCategory, ServiceTier, Weight};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of a shipment to be quoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    /// Weight in kilograms, as entered.
    #[schemars(with = "String")]
    weight_kg: Decimal,
    /// Requested service tier.
    service_tier: ServiceTier,
    /// Category of the goods.
    package_category: PackageCategory,
    /// Whether shipment insurance was requested.
    #[serde(default)]
    insurance_requested: bool,
    /// Optional package size, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    dimensions: Option<Dimensions>,
}

impl ShipmentRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(
        weight_kg: Decimal,
        service_tier: ServiceTier,
        package_category: PackageCategory,
        insurance_requested: bool,
    ) -> Self {
        Self {
            weight_kg,
            service_tier,
            package_category,
            insurance_requested,
            dimensions: None,
        }
    }

    /// Attaches package dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Returns the validated weight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the weight is negative or above
    /// the service limit.
    pub fn weight(&self) -> DomainResult<Weight> {
        Weight::new(self.weight_kg)
    }

    /// Returns the weight as entered, in kilograms.
    #[inline]
    #[must_use]
    pub fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    /// Returns the service tier.
    #[inline]
    #[must_use]
    pub fn service_tier(&self) -> ServiceTier {
        self.service_tier
    }

    /// Returns the package category.
    #[inline]
    #[must_use]
    pub fn package_category(&self) -> PackageCategory {
        self.package_category
    }

    /// Returns true if insurance was requested.
    #[inline]
    #[must_use]
    pub fn insurance_requested(&self) -> bool {
        self.insurance_requested
    }

    /// Returns the package dimensions, if given.
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }
}

impl fmt::Display for ShipmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShipmentRequest({} kg {} {}{})",
            self.weight_kg.normalize(),
            self.service_tier,
            self.package_category,
            if self.insurance_requested {
                " insured"
            } else {
                ""
            }
        )
    }
}
