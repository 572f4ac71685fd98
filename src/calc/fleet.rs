//! Dedicated fleet calculator
//!
//! Models the economics of leasing dedicated trucks (fixed monthly cost spread
//! over trips) against paying the one-way market rate per trip, annualized
//! over the corridor baseline volume.

use serde::{Deserialize, Serialize};

use crate::calc::{Assumptions, MONTHS_PER_YEAR};

/// User-editable parameters for the fleet calculator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FleetParams {
    /// Trips each dedicated truck completes per month
    pub trips_per_truck_per_month: f64,
    /// Monthly lease cost per truck
    pub monthly_lease_cost: f64,
    /// Monthly fixed cost per truck (driver, insurance, maintenance)
    pub monthly_fixed_cost: f64,
    /// Market rate for a single one-way trip
    pub one_way_rate: f64,
}

impl Default for FleetParams {
    fn default() -> Self {
        Self {
            trips_per_truck_per_month: 4.0,
            monthly_lease_cost: 25000.0,
            monthly_fixed_cost: 4000.0,
            one_way_rate: 3300.0,
        }
    }
}

/// Full derived metric set for the fleet calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetMetrics {
    pub total_monthly_cost: f64,
    /// +Infinity when `trips_per_truck_per_month` is zero
    pub cost_per_trip: f64,
    /// Per-trip cost if the truck ran at target utilization
    pub cost_per_trip_at_target: f64,
    /// Market rate minus cost per trip; positive means the fleet wins
    pub cost_difference: f64,
    pub is_profitable: bool,
    pub utilization_pct: f64,
    pub annual_trip_volume: f64,
    pub current_annual_cost: f64,
    pub fleet_trips_required_per_month: f64,
    pub fleet_annual_cost: f64,
    pub fleet_annual_savings: f64,
    /// Truck count needed to carry the baseline volume at current utilization
    pub trucks_required: f64,
    pub savings_percentage: f64,
}

/// Derive the full metric set from the parameters.
///
/// Pure and deterministic: identical inputs yield bit-identical outputs.
pub fn compute(params: &FleetParams, assumptions: &Assumptions) -> FleetMetrics {
    let total_monthly_cost = params.monthly_lease_cost + params.monthly_fixed_cost;
    let cost_per_trip = total_monthly_cost / params.trips_per_truck_per_month;
    let cost_per_trip_at_target = total_monthly_cost / assumptions.target_trips_per_month;

    let cost_difference = params.one_way_rate - cost_per_trip;
    let is_profitable = cost_difference > 0.0;

    let utilization_pct =
        params.trips_per_truck_per_month / assumptions.target_trips_per_month * 100.0;

    let annual_trip_volume = assumptions.baseline_trips_per_month * MONTHS_PER_YEAR;
    let current_annual_cost = params.one_way_rate * annual_trip_volume;
    let fleet_trips_required_per_month = annual_trip_volume / params.trips_per_truck_per_month;
    let fleet_annual_cost = total_monthly_cost * (fleet_trips_required_per_month / MONTHS_PER_YEAR);
    let fleet_annual_savings = current_annual_cost - fleet_annual_cost;
    let trucks_required = (fleet_trips_required_per_month / MONTHS_PER_YEAR).ceil();

    // The loss branch reports the cost overrun relative to the one-way
    // baseline rather than the negated savings ratio.
    let savings_percentage = if fleet_annual_savings > 0.0 {
        fleet_annual_savings / current_annual_cost * 100.0
    } else {
        (fleet_annual_cost / current_annual_cost - 1.0) * 100.0
    };

    FleetMetrics {
        total_monthly_cost,
        cost_per_trip,
        cost_per_trip_at_target,
        cost_difference,
        is_profitable,
        utilization_pct,
        annual_trip_volume,
        current_annual_cost,
        fleet_trips_required_per_month,
        fleet_annual_cost,
        fleet_annual_savings,
        trucks_required,
        savings_percentage,
    }
}
