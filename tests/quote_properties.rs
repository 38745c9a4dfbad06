//! Property tests for the quote engine.

#![allow(missing_docs, clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use regex::Regex;
use rust_decimal::Decimal;
use ship_quote::domain::entities::ShipmentRequest;
use ship_quote::domain::services::{
    FixedClock, INSURANCE_MINIMUM, INSURANCE_RATE, QuoteEngine, SequenceEntropy,
    estimate_delivery_date, generate_tracking_number,
};
use ship_quote::domain::value_objects::{PackageCategory, ServiceTier, TrackingPrefix};
use std::sync::Arc;

fn engine(digits: Vec<u8>) -> QuoteEngine {
    QuoteEngine::new(
        Arc::new(FixedClock::from_ymd(2026, 10, 17).unwrap()),
        Arc::new(SequenceEntropy::new(digits)),
    )
}

fn tier() -> impl Strategy<Value = ServiceTier> {
    prop::sample::select(ServiceTier::ALL.to_vec())
}

fn category() -> impl Strategy<Value = PackageCategory> {
    prop::sample::select(PackageCategory::ALL.to_vec())
}

/// Weights in `[0, 1000]` kg with gram precision.
fn valid_weight() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000).prop_map(|grams| Decimal::new(grams, 3))
}

proptest! {
    #[test]
    fn total_at_least_subtotal_at_least_zero(
        weight in valid_weight(),
        tier in tier(),
        category in category(),
        insured in any::<bool>(),
    ) {
        let quote = engine(vec![0])
            .compute_quote(&ShipmentRequest::new(weight, tier, category, insured))
            .unwrap();
        prop_assert!(quote.subtotal().amount() >= Decimal::ZERO);
        prop_assert!(quote.total_cost().amount() >= quote.subtotal().amount());
        prop_assert!(quote.breakdown().is_consistent());
    }

    #[test]
    fn insurance_zero_or_bounded_below(
        weight in valid_weight(),
        tier in tier(),
        category in category(),
        insured in any::<bool>(),
    ) {
        let quote = engine(vec![0])
            .compute_quote(&ShipmentRequest::new(weight, tier, category, insured))
            .unwrap();
        let insurance = quote.insurance_cost().amount();
        if insured {
            prop_assert!(insurance >= INSURANCE_MINIMUM);
            prop_assert!(insurance >= quote.subtotal().amount() * INSURANCE_RATE);
        } else {
            prop_assert_eq!(insurance, Decimal::ZERO);
        }
    }

    #[test]
    fn faster_tiers_never_arrive_later(offset in 0u64..200_000) {
        let reference = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap();
        let standard = estimate_delivery_date(ServiceTier::Standard, reference).unwrap();
        let express = estimate_delivery_date(ServiceTier::Express, reference).unwrap();
        let overnight = estimate_delivery_date(ServiceTier::Overnight, reference).unwrap();
        prop_assert!(overnight.date() <= express.date());
        prop_assert!(express.date() <= standard.date());
        prop_assert!(overnight.date() > reference);
    }

    #[test]
    fn tracking_numbers_are_well_formed(
        millis in 0i64..4_102_444_800_000,
        digits in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let pattern = Regex::new(r"^[A-Z]{2}[0-9]{8}[A-Z0-9]{4}$").unwrap();
        let clock = FixedClock::from_millis(millis, 0).unwrap();
        let entropy = SequenceEntropy::new(digits);
        let number = generate_tracking_number(&TrackingPrefix::default(), &entropy, &clock).unwrap();
        prop_assert!(pattern.is_match(number.as_str()));
        let expected = format!("{:08}", millis % 100_000_000);
        prop_assert_eq!(number.timestamp_digits(), expected.as_str());
    }

    #[test]
    fn identical_ports_identical_currency(
        weight in valid_weight(),
        tier in tier(),
        category in category(),
        insured in any::<bool>(),
    ) {
        let request = ShipmentRequest::new(weight, tier, category, insured);
        let a = engine(vec![5, 6, 7, 8]).compute_quote(&request).unwrap();
        let b = engine(vec![5, 6, 7, 8]).compute_quote(&request).unwrap();
        prop_assert_eq!(a.breakdown(), b.breakdown());
        prop_assert_eq!(a.tracking_number(), b.tracking_number());
    }

    #[test]
    fn over_limit_always_rejected(
        excess in 1i64..1_000_000_000,
        tier in tier(),
        category in category(),
    ) {
        let weight = Decimal::new(1000, 0) + Decimal::new(excess, 4);
        let err = engine(vec![0])
            .compute_quote(&ShipmentRequest::new(weight, tier, category, false))
            .unwrap_err();
        prop_assert!(err.is_invalid_input());
    }

    #[test]
    fn negative_always_rejected(grams in 1i64..1_000_000_000) {
        let weight = Decimal::new(-grams, 3);
        prop_assert!(
            engine(vec![0])
                .compute_quote(&ShipmentRequest::new(
                    weight,
                    ServiceTier::Standard,
                    PackageCategory::Package,
                    true,
                ))
                .is_err()
        );
    }
}
