//! Fleet calculator command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use crate::cli::FleetArgs;
use trip_econ::{
    calc::fleet,
    config::load_config,
    format::format_currency,
    report::{self, fleet_report},
};

/// Execute the fleet command
///
/// Computes the dedicated fleet report from configured defaults merged with
/// any CLI overrides, and prints it as a table or JSON.
pub fn execute(config_path: &Path, args: &FleetArgs) -> Result<()> {
    let cfg = load_config(config_path)?;

    let mut params = cfg.fleet.clone();
    if let Some(v) = args.trips_per_truck {
        params.trips_per_truck_per_month = v;
    }
    if let Some(v) = args.lease_cost {
        params.monthly_lease_cost = v;
    }
    if let Some(v) = args.fixed_cost {
        params.monthly_fixed_cost = v;
    }
    if let Some(v) = args.one_way_rate {
        params.one_way_rate = v;
    }

    info!(
        trips_per_truck_per_month = params.trips_per_truck_per_month,
        one_way_rate = params.one_way_rate,
        "Computing dedicated fleet economics"
    );

    let metrics = fleet::compute(&params, &cfg.assumptions);
    let rows = fleet_report(&metrics, &cfg.display);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report::to_json(&rows))?);
        return Ok(());
    }

    println!("{}", "Dedicated Fleet Economics".green().bold());
    println!();

    println!("{}", "Parameters:".bold());
    println!(
        "  {}: {}",
        "Trips Per Truck Per Month".cyan(),
        params.trips_per_truck_per_month
    );
    println!(
        "  {}: {}",
        "Monthly Lease Cost".cyan(),
        format_currency(params.monthly_lease_cost, &cfg.display.currency)
    );
    println!(
        "  {}: {}",
        "Monthly Fixed Cost".cyan(),
        format_currency(params.monthly_fixed_cost, &cfg.display.currency)
    );
    println!(
        "  {}: {}",
        "One-Way Trip Rate".cyan(),
        format_currency(params.one_way_rate, &cfg.display.currency)
    );
    println!();

    let verdict = if metrics.is_profitable {
        "✓ Fleet beats the one-way market rate per trip".green()
    } else {
        "✗ Fleet costs more than the one-way market rate per trip".red()
    };
    println!("{}", verdict);
    println!();

    println!("{}", "Financial Impact:".bold());
    for row in &rows {
        let value = match row.key {
            "cost_difference" | "fleet_annual_savings" | "savings_percentage" => {
                if metrics.fleet_annual_savings > 0.0 {
                    row.metric.display.green().bold().to_string()
                } else {
                    row.metric.display.red().bold().to_string()
                }
            }
            _ => row.metric.display.clone(),
        };
        println!("  {:<36} {}", row.label, value);
    }

    Ok(())
}
