//! Report layer: turns a derived metric set into display rows
//!
//! Each row pairs the raw numeric value with its formatted display string so
//! rendering surfaces (the one-shot commands, the dashboard, JSON output)
//! never re-derive or re-format anything themselves.

use serde::Serialize;
use serde_json::{json, Value};

use crate::calc::{FleetMetrics, OneWayMetrics};
use crate::config::DisplayConfig;
use crate::format::{format_currency, format_number, format_percent};

/// A single derived metric: raw value plus its display string.
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub raw: f64,
    pub display: String,
}

/// A labeled metric row in display order.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub metric: Metric,
}

fn row(key: &'static str, label: &'static str, raw: f64, display: String) -> MetricRow {
    MetricRow {
        key,
        label,
        metric: Metric { raw, display },
    }
}

/// Build the one-way calculator report in display order.
pub fn one_way_report(metrics: &OneWayMetrics, display: &DisplayConfig) -> Vec<MetricRow> {
    let c = |v: f64| format_currency(v, &display.currency);

    vec![
        row(
            "current_detention_cost",
            "Current Detention Cost",
            metrics.current_detention_cost,
            c(metrics.current_detention_cost),
        ),
        row(
            "optimized_detention_cost",
            "Optimized Detention Cost",
            metrics.optimized_detention_cost,
            c(metrics.optimized_detention_cost),
        ),
        row(
            "current_trip_cost",
            "Current Trip Cost",
            metrics.current_trip_cost,
            c(metrics.current_trip_cost),
        ),
        row(
            "optimized_trip_cost",
            "Optimized Trip Cost",
            metrics.optimized_trip_cost,
            c(metrics.optimized_trip_cost),
        ),
        row(
            "current_annual_cost",
            "Annual Cost (Current)",
            metrics.current_annual_cost,
            c(metrics.current_annual_cost),
        ),
        row(
            "optimized_annual_cost",
            "Annual Cost (Optimized)",
            metrics.optimized_annual_cost,
            c(metrics.optimized_annual_cost),
        ),
        row(
            "annual_savings",
            "Annual Savings",
            metrics.annual_savings,
            c(metrics.annual_savings),
        ),
        row(
            "savings_percentage",
            "Savings",
            metrics.savings_percentage,
            format!("{} reduction", format_percent(metrics.savings_percentage)),
        ),
    ]
}

/// Build the fleet calculator report in display order.
pub fn fleet_report(metrics: &FleetMetrics, display: &DisplayConfig) -> Vec<MetricRow> {
    let c = |v: f64| format_currency(v, &display.currency);

    let market_position = if metrics.is_profitable {
        format!("{} below market rate", c(metrics.cost_difference))
    } else {
        format!("{} above market rate", c(metrics.cost_difference.abs()))
    };

    let annual_impact = if metrics.fleet_annual_savings > 0.0 {
        format!("+{}", c(metrics.fleet_annual_savings))
    } else {
        c(metrics.fleet_annual_savings)
    };

    let savings_display = if metrics.fleet_annual_savings > 0.0 {
        format!("savings of {}", format_percent(metrics.savings_percentage))
    } else {
        format!(
            "additional cost of {}",
            format_percent(metrics.savings_percentage.abs())
        )
    };

    vec![
        row(
            "utilization_pct",
            "Fleet Utilization",
            metrics.utilization_pct,
            format_percent(metrics.utilization_pct),
        ),
        row(
            "total_monthly_cost",
            "Total Monthly Cost",
            metrics.total_monthly_cost,
            c(metrics.total_monthly_cost),
        ),
        row(
            "cost_per_trip",
            "Cost Per Trip",
            metrics.cost_per_trip,
            c(metrics.cost_per_trip),
        ),
        row(
            "cost_per_trip_at_target",
            "Cost Per Trip (Target Utilization)",
            metrics.cost_per_trip_at_target,
            c(metrics.cost_per_trip_at_target),
        ),
        row(
            "cost_difference",
            "Market Position",
            metrics.cost_difference,
            market_position,
        ),
        row(
            "current_annual_cost",
            "Annual Cost (One-Way Rate)",
            metrics.current_annual_cost,
            c(metrics.current_annual_cost),
        ),
        row(
            "fleet_annual_cost",
            "Annual Cost (Fleet)",
            metrics.fleet_annual_cost,
            c(metrics.fleet_annual_cost),
        ),
        row(
            "fleet_annual_savings",
            "Annual Impact",
            metrics.fleet_annual_savings,
            annual_impact,
        ),
        row(
            "savings_percentage",
            "Relative Impact",
            metrics.savings_percentage,
            savings_display,
        ),
        row(
            "trucks_required",
            "Trucks Required",
            metrics.trucks_required,
            format_number(metrics.trucks_required),
        ),
    ]
}

/// Flatten report rows into a `{ key: { raw, display } }` JSON mapping.
///
/// Non-finite raw values serialize as JSON null; the display string still
/// carries the literal `NaN`/`Infinity` text.
pub fn to_json(rows: &[MetricRow]) -> Value {
    let mut map = serde_json::Map::new();
    for r in rows {
        map.insert(
            r.key.to_string(),
            json!({
                "raw": r.metric.raw,
                "display": r.metric.display,
            }),
        );
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{fleet, one_way, Assumptions, FleetParams, OneWayParams};

    fn display() -> DisplayConfig {
        DisplayConfig::default()
    }

    #[test]
    fn test_one_way_report_defaults() {
        let metrics = one_way::compute(&OneWayParams::default(), &Assumptions::default());
        let rows = one_way_report(&metrics, &display());

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].metric.display, "1,372.8 SAR");
        assert_eq!(rows[4].metric.display, "8,411,040 SAR");
        assert_eq!(rows[6].metric.display, "1,757,520 SAR");
        assert_eq!(rows[7].metric.display, "20.9% reduction");
    }

    #[test]
    fn test_fleet_report_defaults() {
        let metrics = fleet::compute(&FleetParams::default(), &Assumptions::default());
        let rows = fleet_report(&metrics, &display());

        let by_key = |key: &str| {
            rows.iter()
                .find(|r| r.key == key)
                .unwrap_or_else(|| panic!("missing row: {}", key))
        };

        assert_eq!(by_key("utilization_pct").metric.display, "50.0%");
        assert_eq!(by_key("total_monthly_cost").metric.display, "29,000 SAR");
        assert_eq!(by_key("cost_per_trip").metric.display, "7,250 SAR");
        assert_eq!(
            by_key("cost_difference").metric.display,
            "3,950 SAR above market rate"
        );
        assert_eq!(by_key("fleet_annual_savings").metric.display, "+4,852,500 SAR");
        assert_eq!(by_key("trucks_required").metric.display, "38");
    }

    #[test]
    fn test_non_finite_passthrough() {
        let params = FleetParams {
            trips_per_truck_per_month: 0.0,
            ..FleetParams::default()
        };
        let metrics = fleet::compute(&params, &Assumptions::default());
        let rows = fleet_report(&metrics, &display());

        let cost_per_trip = rows.iter().find(|r| r.key == "cost_per_trip").unwrap();
        assert_eq!(cost_per_trip.metric.display, "Infinity SAR");
    }

    #[test]
    fn test_to_json_mapping() {
        let metrics = one_way::compute(&OneWayParams::default(), &Assumptions::default());
        let rows = one_way_report(&metrics, &display());
        let value = to_json(&rows);

        assert_eq!(
            value["annual_savings"]["display"],
            serde_json::json!("1,757,520 SAR")
        );
        assert!(value["annual_savings"]["raw"].is_number());
    }

    #[test]
    fn test_to_json_non_finite_is_null() {
        let params = OneWayParams {
            trips_per_month: 0.0,
            ..OneWayParams::default()
        };
        let metrics = one_way::compute(&params, &Assumptions::default());
        let rows = one_way_report(&metrics, &display());
        let value = to_json(&rows);

        assert!(value["savings_percentage"]["raw"].is_null());
        assert_eq!(
            value["savings_percentage"]["display"],
            serde_json::json!("NaN% reduction")
        );
    }
}
