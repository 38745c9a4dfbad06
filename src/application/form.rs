//! # Shipment Form
//!
//! Key/value form submission turned into a [`ShipmentRequest`].
//!
//! The form applies the input guards the engine does not: weight is clamped
//! into `[0, 1000]` kg (with a notice above the limit) and dimensions must be
//! empty or `LxWxH`.
//!
//! # Field Names
//!
//! | Field          | Meaning                          |
//! |----------------|----------------------------------|
//! | `weight`       | kilograms, decimal               |
//! | `dimensions`   | optional `LxWxH`                 |
//! | `shippingType` | `standard`, `express`, `overnight` |
//! | `packageType`  | `document`, `package`, `fragile`, `hazardous` |
//! | `insurance`    | `on` when requested              |
//!
//! # Examples
//!
//! ```
//! use ship_quote::application::form::{ShipmentForm, MAX_WEIGHT_NOTICE};
//! use rust_decimal::Decimal;
//!
//! let form = ShipmentForm::from_pairs([
//!     ("weight", "1500"),
//!     ("shippingType", "express"),
//!     ("packageType", "fragile"),
//!     ("insurance", "on"),
//! ]);
//! let submission = form.validate().unwrap();
//!
//! assert_eq!(submission.request().weight_kg(), Decimal::new(1000, 0));
//! assert!(submission.request().insurance_requested());
//! assert_eq!(submission.notice(), Some(MAX_WEIGHT_NOTICE));
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::ShipmentRequest;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Dimensions, MAX_WEIGHT_KG, PackageCategory, ServiceTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Notice shown when an entered weight is clamped down to the limit.
pub const MAX_WEIGHT_NOTICE: &str =
    "Maximum weight is 1000kg. Please contact us for heavier shipments.";

/// Value the `insurance` checkbox submits when ticked.
pub const INSURANCE_ON: &str = "on";

/// A weight after clamping, with the notice to show if it was lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedWeight {
    kilograms: Decimal,
    notice: Option<&'static str>,
}

impl ClampedWeight {
    /// Clamped weight in kilograms.
    #[inline]
    #[must_use]
    pub const fn kilograms(&self) -> Decimal {
        self.kilograms
    }

    /// Notice for the user, set only when the weight exceeded the limit.
    #[inline]
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        self.notice
    }
}

/// Clamps `kilograms` into `[0, 1000]`.
///
/// Negative weights silently become zero. Weights above the limit become the
/// limit and carry [`MAX_WEIGHT_NOTICE`].
#[must_use]
pub fn clamp_weight(kilograms: Decimal) -> ClampedWeight {
    if kilograms.is_sign_negative() {
        return ClampedWeight {
            kilograms: Decimal::ZERO,
            notice: None,
        };
    }
    if kilograms > MAX_WEIGHT_KG {
        tracing::warn!(entered = %kilograms, "weight clamped to maximum");
        return ClampedWeight {
            kilograms: MAX_WEIGHT_KG,
            notice: Some(MAX_WEIGHT_NOTICE),
        };
    }
    ClampedWeight {
        kilograms,
        notice: None,
    }
}

/// Raw form fields, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentForm {
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: String,
    /// Optional `LxWxH` dimensions.
    #[serde(default)]
    pub dimensions: String,
    /// Service tier name.
    #[serde(default)]
    pub shipping_type: String,
    /// Package category name.
    #[serde(default)]
    pub package_type: String,
    /// `on` when insurance is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
}

impl ShipmentForm {
    /// Builds a form from submitted key/value pairs.
    ///
    /// Unknown keys are ignored. A repeated key keeps its last value.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "weight" => form.weight = value.into(),
                "dimensions" => form.dimensions = value.into(),
                "shippingType" => form.shipping_type = value.into(),
                "packageType" => form.package_type = value.into(),
                "insurance" => form.insurance = Some(value.into()),
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }
        form
    }

    /// Returns true if the insurance box was ticked.
    #[must_use]
    pub fn insurance_requested(&self) -> bool {
        self.insurance.as_deref() == Some(INSURANCE_ON)
    }

    /// Validates the form and builds the shipment request.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Validation` if the weight, tier or category is
    ///   missing, or the weight is not a number
    /// - `ApplicationError::Domain` if the tier or category is unknown, or the
    ///   dimensions do not match `LxWxH`
    pub fn validate(&self) -> ApplicationResult<FormSubmission> {
        let weight = parse_weight(&self.weight)?;
        let clamped = clamp_weight(weight);

        let tier = ServiceTier::from_str(required("shippingType", &self.shipping_type)?)
            .map_err(DomainError::from)?;
        let category = PackageCategory::from_str(required("packageType", &self.package_type)?)
            .map_err(DomainError::from)?;

        let mut request = ShipmentRequest::new(
            clamped.kilograms(),
            tier,
            category,
            self.insurance_requested(),
        );

        let dimensions = self.dimensions.trim();
        if !dimensions.is_empty() {
            request = request.with_dimensions(dimensions.parse::<Dimensions>()?);
        }

        Ok(FormSubmission {
            request,
            notice: clamped.notice(),
        })
    }
}

fn required<'a>(field: &str, value: &'a str) -> ApplicationResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

fn parse_weight(raw: &str) -> ApplicationResult<Decimal> {
    let raw = required("weight", raw)?;
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ApplicationError::validation(format!("weight '{raw}' is not a number")))
}

/// A validated form: the request plus any notice to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    request: ShipmentRequest,
    notice: Option<&'static str>,
}

impl FormSubmission {
    /// The request to price.
    #[inline]
    #[must_use]
    pub fn request(&self) -> &ShipmentRequest {
        &self.request
    }

    /// Notice raised while validating, if any.
    #[inline]
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Consumes the submission, returning the request.
    #[must_use]
    pub fn into_inner(self) -> ShipmentRequest {
        self.request
    }
}
