use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trip-econ", version, about = "Corridor trip economics calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "trip-econ.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive calculator dashboard (default)
    Dashboard {
        /// Initial view: one-way or fleet
        #[arg(short, long, default_value = "one-way")]
        view: String,
    },

    /// One-way trip cost calculator
    OneWay(OneWayArgs),

    /// Dedicated fleet cost calculator
    Fleet(FleetArgs),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct OneWayArgs {
    /// Trips shipped per month
    #[arg(long)]
    pub trips_per_month: Option<f64>,

    /// Detention charge per truck per day
    #[arg(long)]
    pub detention_rate: Option<f64>,

    /// Current contracted base rate per trip
    #[arg(long)]
    pub base_rate_current: Option<f64>,

    /// Negotiated base rate per trip after optimization
    #[arg(long)]
    pub base_rate_optimized: Option<f64>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FleetArgs {
    /// Trips each dedicated truck completes per month
    #[arg(long)]
    pub trips_per_truck: Option<f64>,

    /// Monthly lease cost per truck
    #[arg(long)]
    pub lease_cost: Option<f64>,

    /// Monthly fixed cost per truck
    #[arg(long)]
    pub fixed_cost: Option<f64>,

    /// Market rate for a single one-way trip
    #[arg(long)]
    pub one_way_rate: Option<f64>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Dashboard if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Dashboard {
            view: "one-way".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_dashboard() {
        let cli = Cli {
            config: PathBuf::from("trip-econ.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Dashboard { view } => {
                assert_eq!(view, "one-way");
            }
            _ => panic!("Expected Dashboard command"),
        }
    }

    #[test]
    fn test_cli_parsing_one_way_overrides() {
        let args = vec![
            "trip-econ",
            "one-way",
            "--trips-per-month",
            "200",
            "--detention-rate",
            "900",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::OneWay(args) => {
                assert_eq!(args.trips_per_month, Some(200.0));
                assert_eq!(args.detention_rate, Some(900.0));
                assert_eq!(args.base_rate_current, None);
                assert!(!args.json);
            }
            _ => panic!("Expected OneWay command"),
        }
    }

    #[test]
    fn test_cli_parsing_fleet_json() {
        let args = vec!["trip-econ", "fleet", "--trips-per-truck", "8", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Fleet(args) => {
                assert_eq!(args.trips_per_truck, Some(8.0));
                assert!(args.json);
            }
            _ => panic!("Expected Fleet command"),
        }
    }

    #[test]
    fn test_cli_parsing_dashboard_view() {
        let args = vec!["trip-econ", "dashboard", "--view", "fleet"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Dashboard { view } => {
                assert_eq!(view, "fleet");
            }
            _ => panic!("Expected Dashboard command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["trip-econ", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Show));
            }
            _ => panic!("Expected Config command"),
        }
    }
}
