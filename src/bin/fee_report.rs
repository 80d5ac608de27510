//! Fee report script
//!
//! Usage:
//!   cargo run --bin fee_report -- payments data/payments.json
//!   cargo run --bin fee_report -- event data/event.json STUDENT
//!
//! Reads records exported from the application database and logs the
//! commission totals or the fee a viewer would see.

use anyhow::{bail, Context, Result};
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stairs_fees::config::AppConfig;
use stairs_fees::types::{EventFeeContext, Transaction};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    info!("Config: {}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("payments") => {
            let path = args.get(1).context("missing path to payments JSON")?;
            report_payments(&config, path)
        }
        Some("event") => {
            let path = args.get(1).context("missing path to event JSON")?;
            let role = args.get(2).map(String::as_str).unwrap_or("");
            report_event(&config, path, role)
        }
        _ => bail!("usage: fee_report payments <file.json> | event <file.json> <role>"),
    }
}

fn report_payments(config: &AppConfig, path: &str) -> Result<()> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let transactions: Vec<Transaction> =
        serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path))?;

    if transactions.is_empty() {
        warn!("No payment records in {}", path);
    }

    let calculator = config.commission_calculator()?;
    for tx in &transactions {
        let result = calculator.calculate(tx.amount);
        info!(
            id = tx.id.as_deref().unwrap_or("-"),
            status = tx.status.as_deref().unwrap_or("-"),
            amount = tx.amount,
            commission = result.commission,
            net = result.net_revenue,
            "payment"
        );
    }

    let totals = calculator.calculate_bulk_commission(&transactions);
    info!("Records: {}", transactions.len());
    info!("Totals: {}", serde_json::to_string(&totals)?);
    Ok(())
}

fn report_event(config: &AppConfig, path: &str, role: &str) -> Result<()> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let event: EventFeeContext =
        serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path))?;

    let info = config.event_fee_resolver().get_event_fee_info(&event, role);
    info!("{} for role '{}': {}", info.kind.display_name(), role, info.label);
    info!("FeeInfo: {}", serde_json::to_string(&info)?);
    Ok(())
}
