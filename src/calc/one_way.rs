//! One-way trip cost calculator
//!
//! Compares the current pay-per-trip market rate (with heavy border detention)
//! against an optimized rate with reduced detention, annualized over the
//! monthly trip volume.

use serde::{Deserialize, Serialize};

use crate::calc::{Assumptions, MONTHS_PER_YEAR};

/// User-editable parameters for the one-way calculator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OneWayParams {
    /// Trips shipped per month
    pub trips_per_month: f64,
    /// Detention charge per truck per day
    pub detention_rate_per_day: f64,
    /// Current contracted base rate per trip
    pub base_rate_current: f64,
    /// Negotiated base rate per trip after optimization
    pub base_rate_optimized: f64,
}

impl Default for OneWayParams {
    fn default() -> Self {
        Self {
            trips_per_month: 150.0,
            detention_rate_per_day: 880.0,
            base_rate_current: 3300.0,
            base_rate_optimized: 3450.0,
        }
    }
}

/// Full derived metric set for the one-way calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct OneWayMetrics {
    pub current_detention_cost: f64,
    pub optimized_detention_cost: f64,
    pub current_trip_cost: f64,
    pub optimized_trip_cost: f64,
    pub current_annual_cost: f64,
    pub optimized_annual_cost: f64,
    pub annual_savings: f64,
    /// NaN when `current_annual_cost` is zero
    pub savings_percentage: f64,
}

/// Derive the full metric set from the parameters.
///
/// Pure and deterministic: identical inputs yield bit-identical outputs.
pub fn compute(params: &OneWayParams, assumptions: &Assumptions) -> OneWayMetrics {
    let current_detention_cost = assumptions.current_detention_days * params.detention_rate_per_day;
    let optimized_detention_cost =
        assumptions.optimized_detention_days * params.detention_rate_per_day;

    let current_trip_cost = params.base_rate_current + current_detention_cost;
    let optimized_trip_cost = params.base_rate_optimized + optimized_detention_cost;

    let current_annual_cost = current_trip_cost * params.trips_per_month * MONTHS_PER_YEAR;
    let optimized_annual_cost = optimized_trip_cost * params.trips_per_month * MONTHS_PER_YEAR;

    let annual_savings = current_annual_cost - optimized_annual_cost;
    let savings_percentage = annual_savings / current_annual_cost * 100.0;

    OneWayMetrics {
        current_detention_cost,
        optimized_detention_cost,
        current_trip_cost,
        optimized_trip_cost,
        current_annual_cost,
        optimized_annual_cost,
        annual_savings,
        savings_percentage,
    }
}
