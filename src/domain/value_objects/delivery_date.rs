//! # Delivery Date
//!
//! Estimated calendar date of delivery.
//!
//! A [`DeliveryDate`] is a plain calendar date; it carries no time of day and
//! no timezone. It displays in the US long form, e.g.
//! `Friday, October 23, 2026`.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use ship_quote::domain::value_objects::delivery_date::DeliveryDate;
//! use ship_quote::domain::value_objects::enums::ServiceTier;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! let date = DeliveryDate::estimate(ServiceTier::Express, today).unwrap();
//! assert_eq!(date.to_string(), "Tuesday, October 20, 2026");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::ServiceTier;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format: weekday, month name, day, year.
const LONG_FORMAT: &str = "%A, %B %-d, %Y";

/// An estimated delivery date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryDate(NaiveDate);

impl DeliveryDate {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Projects delivery for `tier` from the `reference` calendar date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the result falls outside the
    /// representable calendar.
    pub fn estimate(tier: ServiceTier, reference: NaiveDate) -> DomainResult<Self> {
        reference
            .checked_add_days(Days::new(u64::from(tier.transit_days())))
            .map(Self)
            .ok_or_else(|| {
                DomainError::invalid_input("reference_date", "delivery date out of range")
            })
    }

    /// Returns the calendar date.
    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the long display form.
    #[must_use]
    pub fn to_long_string(&self) -> String {
        self.0.format(LONG_FORMAT).to_string()
    }
}

impl fmt::Display for DeliveryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(LONG_FORMAT))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn standard_adds_six_days() {
        let date = DeliveryDate::estimate(ServiceTier::Standard, reference()).unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2026, 10, 23).unwrap());
    }

    #[test]
    fn overnight_adds_one_day() {
        let date = DeliveryDate::estimate(ServiceTier::Overnight, reference()).unwrap();
        assert_eq!(date.to_string(), "Sunday, October 18, 2026");
    }

    #[test]
    fn crosses_month_and_year() {
        let eve = NaiveDate::from_ymd_opt(2026, 12, 28).unwrap();
        let date = DeliveryDate::estimate(ServiceTier::Standard, eve).unwrap();
        assert_eq!(date.to_string(), "Sunday, January 3, 2027");
    }

    #[test]
    fn single_digit_day_is_not_padded() {
        let date = DeliveryDate::new(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert_eq!(date.to_long_string(), "Thursday, March 5, 2026");
    }

    #[test]
    fn end_of_calendar_is_rejected() {
        let err = DeliveryDate::estimate(ServiceTier::Standard, NaiveDate::MAX).unwrap_err();
        assert_eq!(err.field(), "reference_date");
    }

    #[test]
    fn faster_tiers_arrive_no_later() {
        let overnight = DeliveryDate::estimate(ServiceTier::Overnight, reference()).unwrap();
        let express = DeliveryDate::estimate(ServiceTier::Express, reference()).unwrap();
        let standard = DeliveryDate::estimate(ServiceTier::Standard, reference()).unwrap();
        assert!(overnight <= express);
        assert!(express <= standard);
    }

    #[test]
    fn serde_as_iso_date() {
        let date = DeliveryDate::new(reference());
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2026-10-17\"");
    }
}
