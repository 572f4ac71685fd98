/// Integration tests for the trip economics calculators
use trip_econ::{
    calc::{fleet, one_way, Assumptions, FleetParams, OneWayParams},
    config::{Config, DisplayConfig},
    report::{fleet_report, one_way_report, to_json},
};

#[test]
fn test_one_way_corridor_defaults() {
    // tripsPerMonth=150, detentionRate=880, baseRateCurrent=3300,
    // baseRateOptimized=3450
    let metrics = one_way::compute(&OneWayParams::default(), &Assumptions::default());

    assert!((metrics.current_detention_cost - 1372.8).abs() < 1e-9);
    assert!((metrics.optimized_detention_cost - 246.4).abs() < 1e-9);
    assert!((metrics.current_trip_cost - 4672.8).abs() < 1e-9);
    assert!((metrics.optimized_trip_cost - 3696.4).abs() < 1e-9);
    assert!((metrics.current_annual_cost - 8_411_040.0).abs() < 1e-6);
    assert!((metrics.optimized_annual_cost - 6_653_520.0).abs() < 1e-6);
    assert!((metrics.annual_savings - 1_757_520.0).abs() < 1e-6);
    assert!((metrics.savings_percentage - 20.9).abs() < 0.05);
}

#[test]
fn test_fleet_corridor_defaults() {
    // tripsPerTruckPerMonth=4, lease=25000, fixed=4000, oneWayRate=3300
    let metrics = fleet::compute(&FleetParams::default(), &Assumptions::default());

    assert_eq!(metrics.total_monthly_cost, 29_000.0);
    assert_eq!(metrics.cost_per_trip, 7_250.0);
    assert_eq!(metrics.cost_per_trip_at_target, 3_625.0);
    assert_eq!(metrics.utilization_pct, 50.0);
    assert!(!metrics.is_profitable);
}

#[test]
fn test_fleet_at_target_utilization() {
    let params = FleetParams {
        trips_per_truck_per_month: 8.0,
        ..FleetParams::default()
    };
    let metrics = fleet::compute(&params, &Assumptions::default());

    assert_eq!(metrics.cost_per_trip, 3_625.0);
    assert_eq!(metrics.utilization_pct, 100.0);
    assert_eq!(metrics.cost_difference, -325.0);
    assert!(!metrics.is_profitable);
}

#[test]
fn test_compute_is_idempotent() {
    let one_way_params = OneWayParams {
        trips_per_month: 37.0,
        detention_rate_per_day: 913.5,
        base_rate_current: 3121.0,
        base_rate_optimized: 3378.25,
    };
    let fleet_params = FleetParams {
        trips_per_truck_per_month: 5.5,
        monthly_lease_cost: 27_300.0,
        monthly_fixed_cost: 4_750.0,
        one_way_rate: 3_410.0,
    };
    let assumptions = Assumptions::default();

    assert_eq!(
        one_way::compute(&one_way_params, &assumptions),
        one_way::compute(&one_way_params, &assumptions)
    );
    assert_eq!(
        fleet::compute(&fleet_params, &assumptions),
        fleet::compute(&fleet_params, &assumptions)
    );
}

#[test]
fn test_degenerate_inputs_pass_through() {
    // No validation layer: the degenerate values surface in the report
    let params = FleetParams {
        trips_per_truck_per_month: 0.0,
        ..FleetParams::default()
    };
    let metrics = fleet::compute(&params, &Assumptions::default());
    assert!(metrics.cost_per_trip.is_infinite() && metrics.cost_per_trip > 0.0);

    let rows = fleet_report(&metrics, &DisplayConfig::default());
    let cost_row = rows.iter().find(|r| r.key == "cost_per_trip").unwrap();
    assert_eq!(cost_row.metric.display, "Infinity SAR");

    let params = OneWayParams {
        trips_per_month: 0.0,
        ..OneWayParams::default()
    };
    let metrics = one_way::compute(&params, &Assumptions::default());
    assert_eq!(metrics.current_annual_cost, 0.0);
    assert!(metrics.savings_percentage.is_nan());
}

#[test]
fn test_savings_identity_holds_for_mixed_inputs() {
    let assumptions = Assumptions::default();
    let cases = [
        (150.0, 880.0, 3300.0, 3450.0),
        (1.0, 0.0, 0.0, 0.0),
        (-10.0, 500.0, 2000.0, 2500.0),
        (0.5, 1200.75, 3300.0, 100.0),
    ];

    for (trips, rate, current, optimized) in cases {
        let params = OneWayParams {
            trips_per_month: trips,
            detention_rate_per_day: rate,
            base_rate_current: current,
            base_rate_optimized: optimized,
        };
        let metrics = one_way::compute(&params, &assumptions);
        assert_eq!(
            metrics.annual_savings,
            metrics.current_annual_cost - metrics.optimized_annual_cost
        );
    }
}

#[test]
fn test_profitability_flag_matches_rate_comparison() {
    let assumptions = Assumptions::default();
    for trips in [1.0, 4.0, 8.0, 9.0, 20.0] {
        let params = FleetParams {
            trips_per_truck_per_month: trips,
            ..FleetParams::default()
        };
        let metrics = fleet::compute(&params, &assumptions);
        assert_eq!(
            metrics.is_profitable,
            params.one_way_rate > metrics.cost_per_trip,
            "profitability mismatch at {} trips",
            trips
        );
    }
}

#[test]
fn test_json_report_contract() {
    // Output contract: flat mapping from metric name to { raw, display }
    let cfg = Config::default();
    let metrics = one_way::compute(&cfg.one_way, &cfg.assumptions);
    let value = to_json(&one_way_report(&metrics, &cfg.display));

    let object = value.as_object().expect("report must be a JSON object");
    assert_eq!(object.len(), 8);
    for (key, entry) in object {
        assert!(entry.get("raw").is_some(), "{} missing raw", key);
        assert!(entry["display"].is_string(), "{} missing display", key);
    }

    assert_eq!(object["current_trip_cost"]["display"], "4,672.8 SAR");
    assert_eq!(object["savings_percentage"]["display"], "20.9% reduction");
}

#[test]
fn test_alternate_assumptions_flow_through() {
    // The embedded constants are configuration, not code
    let assumptions = Assumptions {
        current_detention_days: 2.0,
        optimized_detention_days: 0.5,
        target_trips_per_month: 10.0,
        baseline_trips_per_month: 100.0,
    };

    let one_way_metrics = one_way::compute(&OneWayParams::default(), &assumptions);
    assert_eq!(one_way_metrics.current_detention_cost, 1760.0);
    assert_eq!(one_way_metrics.optimized_detention_cost, 440.0);

    let fleet_metrics = fleet::compute(&FleetParams::default(), &assumptions);
    assert_eq!(fleet_metrics.cost_per_trip_at_target, 2900.0);
    assert_eq!(fleet_metrics.utilization_pct, 40.0);
    assert_eq!(fleet_metrics.annual_trip_volume, 1200.0);
}
