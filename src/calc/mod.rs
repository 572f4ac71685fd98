//! Trip economics calculation core
//!
//! Two pure calculators over a shared set of corridor assumptions:
//! - `one_way`: market-rate trip cost with detention, current vs. optimized
//! - `fleet`: dedicated-truck lease model vs. the one-way market rate
//!
//! Both calculators are deterministic functions of their parameter set.
//! Degenerate inputs (zero or negative denominators) are not rejected; the
//! resulting `NaN`/`Infinity` values flow through to the display layer.

pub mod fleet;
pub mod one_way;

pub use fleet::{FleetMetrics, FleetParams};
pub use one_way::{OneWayMetrics, OneWayParams};

use serde::{Deserialize, Serialize};

/// Months in a billing year, used by every annualized figure.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Corridor assumptions shared by both calculators.
///
/// These were measured on the corridor and are fixed per deployment; they are
/// configuration, not user inputs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Assumptions {
    /// Average detention days accrued per trip under current operations
    pub current_detention_days: f64,
    /// Average detention days per trip after border-crossing optimization
    pub optimized_detention_days: f64,
    /// Trips per truck per month at full utilization
    pub target_trips_per_month: f64,
    /// Corridor-wide monthly trip volume used for annualized comparisons
    pub baseline_trips_per_month: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            current_detention_days: 1.56,
            optimized_detention_days: 0.28,
            target_trips_per_month: 8.0,
            baseline_trips_per_month: 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assumptions() {
        let assumptions = Assumptions::default();
        assert_eq!(assumptions.current_detention_days, 1.56);
        assert_eq!(assumptions.optimized_detention_days, 0.28);
        assert_eq!(assumptions.target_trips_per_month, 8.0);
        assert_eq!(assumptions.baseline_trips_per_month, 150.0);
    }
}
