//! One-way calculator command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use crate::cli::OneWayArgs;
use trip_econ::{
    calc::one_way,
    config::load_config,
    format::format_currency,
    report::{self, one_way_report},
};

/// Execute the one-way command
///
/// Computes the one-way trip cost report from configured defaults merged with
/// any CLI overrides, and prints it as a table or JSON.
pub fn execute(config_path: &Path, args: &OneWayArgs) -> Result<()> {
    let cfg = load_config(config_path)?;

    let mut params = cfg.one_way.clone();
    if let Some(v) = args.trips_per_month {
        params.trips_per_month = v;
    }
    if let Some(v) = args.detention_rate {
        params.detention_rate_per_day = v;
    }
    if let Some(v) = args.base_rate_current {
        params.base_rate_current = v;
    }
    if let Some(v) = args.base_rate_optimized {
        params.base_rate_optimized = v;
    }

    info!(
        trips_per_month = params.trips_per_month,
        detention_rate_per_day = params.detention_rate_per_day,
        "Computing one-way trip economics"
    );

    let metrics = one_way::compute(&params, &cfg.assumptions);
    let rows = one_way_report(&metrics, &cfg.display);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report::to_json(&rows))?);
        return Ok(());
    }

    println!("{}", "One-Way Trip Economics".green().bold());
    println!();

    println!("{}", "Parameters:".bold());
    println!(
        "  {}: {}",
        "Monthly Trips".cyan(),
        params.trips_per_month
    );
    println!(
        "  {}: {}",
        "Detention Rate".cyan(),
        format_currency(params.detention_rate_per_day, &cfg.display.currency)
    );
    println!(
        "  {}: {}",
        "Current Base Rate".cyan(),
        format_currency(params.base_rate_current, &cfg.display.currency)
    );
    println!(
        "  {}: {}",
        "Optimized Base Rate".cyan(),
        format_currency(params.base_rate_optimized, &cfg.display.currency)
    );
    println!();

    println!("{}", "Financial Impact:".bold());
    for row in &rows {
        let value = if row.key == "annual_savings" || row.key == "savings_percentage" {
            if metrics.annual_savings > 0.0 {
                row.metric.display.green().bold().to_string()
            } else {
                row.metric.display.red().bold().to_string()
            }
        } else {
            row.metric.display.clone()
        };
        println!("  {:<28} {}", row.label, value);
    }

    Ok(())
}
