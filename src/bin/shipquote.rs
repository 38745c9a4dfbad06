//! Command-line shipping quote.
//!
//! # Usage
//!
//! ```bash
//! # 10 kg parcel, standard service
//! cargo run --features cli --bin shipquote -- --weight 10 --tier standard --category package
//!
//! # Insured fragile goods given in pounds, as JSON
//! cargo run --features cli --bin shipquote -- \
//!     --weight 22 --unit lb --tier express --category fragile --insurance --json
//! ```
//!
//! # Environment Variables
//!
//! - `SHIPQUOTE_TRACKING_PREFIX`: tracking number prefix (default `LC`)
//! - `SHIPQUOTE_CURRENCY`: export currency (default `USD`)
//! - `SHIPQUOTE_LOG__LEVEL`, `SHIPQUOTE_LOG__FORMAT`: logging
//! - `RUST_LOG`: overrides the configured log level

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use ship_quote::application::{QuoteSession, ShipmentForm};
use ship_quote::domain::entities::Quote;
use ship_quote::domain::services::QuoteEngine;
use ship_quote::domain::value_objects::{PackageCategory, ServiceTier, WeightUnit, convert_weight};
use ship_quote::infrastructure::{AppConfig, SystemClock, ThreadRngEntropy, init_tracing};
use std::path::PathBuf;
use std::sync::Arc;

/// Quote the cost of shipping a package.
#[derive(Parser, Debug)]
#[command(name = "shipquote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Package weight
    #[arg(short, long, allow_hyphen_values = true)]
    weight: Decimal,

    /// Unit of --weight: kg, lb, g or oz
    #[arg(short, long, default_value = "kg")]
    unit: WeightUnit,

    /// Service tier: standard, express or overnight
    #[arg(short, long)]
    tier: ServiceTier,

    /// Package category: document, package, fragile or hazardous
    #[arg(short, long)]
    category: PackageCategory,

    /// Add shipment insurance
    #[arg(short, long)]
    insurance: bool,

    /// Package dimensions in centimetres, LxWxH
    #[arg(short, long)]
    dimensions: Option<String>,

    /// Print the export record as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.log).context("failed to initialise logging")?;

    let kilograms = convert_weight(cli.weight, cli.unit, WeightUnit::Kg)
        .context("failed to convert weight")?;

    let mut pairs = vec![
        ("weight", kilograms.normalize().to_string()),
        ("shippingType", cli.tier.as_str().to_owned()),
        ("packageType", cli.category.as_str().to_owned()),
    ];
    if cli.insurance {
        pairs.push(("insurance", "on".to_owned()));
    }
    if let Some(dimensions) = cli.dimensions {
        pairs.push(("dimensions", dimensions));
    }
    let form = ShipmentForm::from_pairs(pairs);

    let engine = QuoteEngine::new(Arc::new(SystemClock), Arc::new(ThreadRngEntropy))
        .with_tracking_prefix(config.tracking_prefix()?);
    let mut session = QuoteSession::new(engine).with_currency(config.currency.as_str());

    session.submit(&form).context("quote rejected")?;
    if let Some(notice) = session.last_notice() {
        eprintln!("{notice}");
    }

    if cli.json {
        println!("{}", session.export_json().context("failed to export quote")?);
    } else if let Some(quote) = session.last_quote() {
        print_quote(quote, &config.currency);
    }

    Ok(())
}

fn print_quote(quote: &Quote, currency: &str) {
    println!("Shipping quote ({currency})");
    println!("  Base cost:       {:>10}", quote.base_cost().to_string());
    println!("  Weight cost:     {:>10}", quote.weight_cost().to_string());
    println!("  Handling fee:    {:>10}", quote.handling_cost().to_string());
    println!("  Subtotal:        {:>10}", quote.subtotal().to_string());
    println!("  Insurance:       {:>10}", quote.insurance_cost().to_string());
    println!("  Total:           {:>10}", quote.total_cost().to_string());
    println!();
    println!("  Estimated delivery: {}", quote.estimated_delivery_date());
    println!("  Tracking number:    {}", quote.tracking_number());
}
