//! Command-line front end: quotes one shipment and prints the quote card.
//!
//! ```text
//! freight-quote --origin "São Paulo, SP" --destination "Rio de Janeiro, RJ" \
//!     --zone regional --weight 10 --volume 0.5 \
//!     --strategy by_zone --sla standard --add-on toll --add-on insurance
//! ```

use anyhow::Context;
use clap::Parser;
use freight_quote::application::services::QuoteEngine;
use freight_quote::domain::entities::{Quote, ShipmentRequest};
use freight_quote::domain::value_objects::{AddOnService, PricingStrategyKind, ServiceLevel, Zone};
use freight_quote::infrastructure::{ConfigStore, Settings, init_tracing};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

/// Entries printed by `--show-log`.
const LOG_TAIL: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "freight-quote", version, about = "Parcel freight quoting")]
struct Cli {
    #[arg(long, help = "Origin address")]
    origin: String,
    #[arg(long, help = "Destination address")]
    destination: String,
    #[arg(long, help = "Zone: local, regional, national or international")]
    zone: Zone,
    #[arg(long, help = "Weight in kilograms")]
    weight: Decimal,
    #[arg(long, help = "Volume in cubic metres")]
    volume: Decimal,
    #[arg(long, default_value_t = false, help = "Request express delivery")]
    express: bool,
    #[arg(
        long,
        default_value_t = PricingStrategyKind::ByZone,
        help = "Pricing strategy: by_zone, by_weight, by_volume or express"
    )]
    strategy: PricingStrategyKind,
    #[arg(
        long,
        default_value_t = ServiceLevel::Standard,
        help = "Service level: economy, standard or priority"
    )]
    sla: ServiceLevel,
    #[arg(long = "add-on", help = "Add-on service (repeatable): toll, insurance or packaging")]
    add_ons: Vec<AddOnService>,
    #[arg(long, help = "Settings file (TOML); overrides FREIGHT_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, help = "Emit logs as JSON lines")]
    log_json: bool,
    #[arg(long, help = "Print the most recent log entries after the quote")]
    show_log: bool,
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    request: &'a ShipmentRequest,
    quote: &'a Quote,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let settings = match &cli.config {
        Some(path) => Settings::from_sources(Some(path.as_path()))
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load().context("failed to load settings")?,
    };
    let store = ConfigStore::init_global(settings.rates)?;
    tracing::info!(system = %store.system_info(), "starting");

    let engine = QuoteEngine::new(store);
    let request = ShipmentRequest::new(
        cli.origin,
        cli.destination,
        cli.zone,
        cli.weight,
        cli.volume,
        cli.express,
    );
    let quote = engine.quote(&request, cli.strategy, cli.sla, &cli.add_ons)?;

    if cli.json {
        let output = QuoteOutput {
            request: &request,
            quote: &quote,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", quote.render(&request));
    }

    if cli.show_log {
        let store = engine.store();
        println!();
        println!("{} - last {} quotes", store.system_info(), LOG_TAIL);
        for entry in store.recent(LOG_TAIL) {
            println!("{entry}");
        }
    }

    Ok(())
}
