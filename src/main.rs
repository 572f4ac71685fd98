use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use trip_econ::init_tracing;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early
    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Dashboard { view } => {
            commands::dashboard::execute(&args.config, &view)?;
        }
        cli::Commands::OneWay(one_way_args) => {
            commands::one_way::execute(&args.config, &one_way_args)?;
        }
        cli::Commands::Fleet(fleet_args) => {
            commands::fleet::execute(&args.config, &fleet_args)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Trip Economics v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
