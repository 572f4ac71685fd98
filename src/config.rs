use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calc::{Assumptions, FleetParams, OneWayParams};
use crate::error::AppError;

/// Application configuration
///
/// Every section has built-in defaults matching the corridor study, so the
/// binary runs without a configuration file. A file or `TRIP_ECON__*`
/// environment variables override individual values.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub assumptions: Assumptions,
    pub one_way: OneWayParams,
    pub fleet: FleetParams,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Currency code appended to formatted amounts
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "SAR".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, AppError> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("TRIP_ECON").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> Result<(), AppError> {
    // User inputs are deliberately unvalidated (degenerate values render as
    // NaN/Infinity), but the corridor assumptions are denominators in every
    // derived metric definition and must be usable.
    if !(cfg.assumptions.target_trips_per_month > 0.0) {
        return Err(AppError::InvalidConfig(
            "assumptions.target_trips_per_month must be positive".to_string(),
        ));
    }

    if !(cfg.assumptions.baseline_trips_per_month > 0.0) {
        return Err(AppError::InvalidConfig(
            "assumptions.baseline_trips_per_month must be positive".to_string(),
        ));
    }

    if !(cfg.assumptions.current_detention_days >= 0.0)
        || !(cfg.assumptions.optimized_detention_days >= 0.0)
    {
        return Err(AppError::InvalidConfig(
            "detention day baselines must be non-negative".to_string(),
        ));
    }

    if cfg.display.currency.is_empty() {
        return Err(AppError::InvalidConfig(
            "display.currency cannot be empty".to_string(),
        ));
    }

    Ok(())
}
