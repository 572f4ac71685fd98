use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use trip_econ::config::load_config;

/// Execute the config show command
///
/// Displays the effective configuration (defaults merged with file and
/// environment overrides)
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Currency".cyan(), cfg.display.currency);
    println!(
        "  {}: {} trips/truck/month",
        "Target Utilization".cyan(),
        cfg.assumptions.target_trips_per_month
    );
    println!(
        "  {}: {} trips/month",
        "Baseline Volume".cyan(),
        cfg.assumptions.baseline_trips_per_month
    );
    println!(
        "  {}: {} / {} days per trip",
        "Detention Baselines".cyan(),
        cfg.assumptions.current_detention_days,
        cfg.assumptions.optimized_detention_days
    );

    info!("Configuration validation successful");
    Ok(())
}
