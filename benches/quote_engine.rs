//! Quote engine benchmarks.

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use ship_quote::application::{QuoteSession, ShipmentForm};
use ship_quote::domain::entities::ShipmentRequest;
use ship_quote::domain::services::{FixedClock, QuoteEngine, SequenceEntropy};
use ship_quote::domain::value_objects::{PackageCategory, ServiceTier};
use std::hint::black_box;
use std::sync::Arc;

fn engine() -> QuoteEngine {
    QuoteEngine::new(
        Arc::new(FixedClock::from_ymd(2026, 10, 17).unwrap()),
        Arc::new(SequenceEntropy::new(vec![1, 2, 3, 4])),
    )
}

fn bench_compute_quote(c: &mut Criterion) {
    let engine = engine();
    let request = ShipmentRequest::new(
        Decimal::new(1234, 2),
        ServiceTier::Express,
        PackageCategory::Fragile,
        true,
    );

    c.bench_function("compute_quote", |b| {
        b.iter(|| engine.compute_quote(black_box(&request)).unwrap())
    });

    c.bench_function("price_only", |b| {
        b.iter(|| engine.price(black_box(&request)).unwrap())
    });
}

fn bench_all_combinations(c: &mut Criterion) {
    let engine = engine();
    let requests: Vec<ShipmentRequest> = ServiceTier::ALL
        .iter()
        .flat_map(|tier| {
            PackageCategory::ALL
                .iter()
                .map(move |category| ShipmentRequest::new(Decimal::new(50, 0), *tier, *category, true))
        })
        .collect();

    c.bench_function("compute_quote_all_combinations", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(engine.compute_quote(request).unwrap());
            }
        })
    });
}

fn bench_form_submission(c: &mut Criterion) {
    let form = ShipmentForm::from_pairs([
        ("weight", "12.5"),
        ("dimensions", "40x30x20"),
        ("shippingType", "overnight"),
        ("packageType", "package"),
        ("insurance", "on"),
    ]);
    let mut session = QuoteSession::new(engine());

    c.bench_function("session_submit_and_export", |b| {
        b.iter(|| {
            session.submit(black_box(&form)).unwrap();
            black_box(session.export())
        })
    });
}

criterion_group!(
    benches,
    bench_compute_quote,
    bench_all_combinations,
    bench_form_submission
);
criterion_main!(benches);
