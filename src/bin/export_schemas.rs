//! Writes JSON Schemas for the wire types.
//!
//! ```bash
//! cargo run --features cli --bin export_schemas -- --out-dir schemas
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use schemars::schema_for;
use ship_quote::application::dto::QuoteExport;
use ship_quote::domain::entities::ShipmentRequest;
use std::fs;
use std::path::PathBuf;

/// Export JSON Schemas for ShipmentRequest and QuoteExport.
#[derive(Parser, Debug)]
#[command(name = "export_schemas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to write the schema files into
    #[arg(short, long, default_value = "schemas")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;

    let schemas = [
        ("shipment_request.json", schema_for!(ShipmentRequest)),
        ("quote_export.json", schema_for!(QuoteExport)),
    ];

    for (file_name, schema) in schemas {
        let path = cli.out_dir.join(file_name);
        let json = serde_json::to_string_pretty(&schema)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
