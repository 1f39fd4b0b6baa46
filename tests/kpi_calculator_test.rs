// ABOUTME: Integration tests for the KPI calculator
// ABOUTME: Reference scenarios, degenerate inputs and input sanitization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{
    cac_exceeds_ltv_inputs, healthy_inputs, init_test_logging, zero_fixed_costs_inputs,
    zero_lifetime_inputs, zero_margin_inputs,
};
use lean_canvas::intelligence::{calculate_kpis, sanitize_inputs};
use lean_canvas::models::FinancialInputs;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_healthy_canvas_kpis() {
    init_test_logging();
    let kpis = calculate_kpis(&healthy_inputs());

    assert_eq!(kpis.unit_margin, 50.0);
    assert_eq!(kpis.monthly_revenue, 5000.0);
    assert_eq!(kpis.monthly_profit, 250.0);
    assert_eq!(kpis.ltv, 600.0);
    assert_eq!(kpis.cac, 25.0);
    assert_close(kpis.cac_ltv_ratio, 25.0 / 600.0);
    assert_eq!(kpis.break_even_units, 20.0);
    assert_close(kpis.break_even_months, 0.4);
    assert!(kpis.break_even_reachable);
}

#[test]
fn test_zero_fixed_costs_break_even_immediately() {
    let kpis = calculate_kpis(&zero_fixed_costs_inputs());

    assert_eq!(kpis.break_even_units, 0.0);
    assert_eq!(kpis.break_even_months, 0.0);
    assert!(kpis.break_even_reachable);
}

#[test]
fn test_zero_margin_break_even_unreachable() {
    let kpis = calculate_kpis(&zero_margin_inputs());

    assert_eq!(kpis.unit_margin, 0.0);
    assert_eq!(kpis.break_even_units, 0.0);
    assert_eq!(kpis.break_even_months, 0.0);
    assert!(!kpis.break_even_reachable);
}

#[test]
fn test_zero_customers_break_even_months_unreachable() {
    let inputs = FinancialInputs::new(100.0, 50.0, 1000.0, 25.0, 0.0, 12.0);
    let kpis = calculate_kpis(&inputs);

    assert_eq!(kpis.break_even_units, 20.0);
    assert_eq!(kpis.break_even_months, 0.0);
    assert!(!kpis.break_even_reachable);
    assert_eq!(kpis.monthly_revenue, 0.0);
    assert_eq!(kpis.monthly_profit, -1000.0);
}

#[test]
fn test_zero_lifetime_gives_infinite_ratio() {
    let kpis = calculate_kpis(&zero_lifetime_inputs());

    assert_eq!(kpis.ltv, 0.0);
    assert!(kpis.cac_ltv_ratio.is_infinite());
    assert!(kpis.cac_ltv_ratio.is_sign_positive());
    assert_eq!(kpis.ltv_cac_ratio(), 0.0);
}

#[test]
fn test_cac_exceeds_ltv_scenario() {
    let kpis = calculate_kpis(&cac_exceeds_ltv_inputs());

    assert_eq!(kpis.unit_margin, 2.0);
    assert_eq!(kpis.monthly_revenue, 140.0);
    assert_eq!(kpis.monthly_profit, -1530.0);
    assert_eq!(kpis.ltv, 12.0);
    assert_eq!(kpis.cac, 50.0);
    assert!(kpis.cac > kpis.ltv);
    assert_eq!(kpis.break_even_units, 285.0);
    assert_close(kpis.break_even_months, 14.25);
}

#[test]
fn test_free_acquisition_ratio_is_zero_regardless_of_ltv() {
    let positive_ltv = FinancialInputs::new(100.0, 50.0, 1000.0, 0.0, 50.0, 12.0);
    let zero_ltv = FinancialInputs::new(100.0, 50.0, 1000.0, 0.0, 50.0, 0.0);
    let negative_ltv = FinancialInputs::new(50.0, 100.0, 1000.0, 0.0, 50.0, 12.0);

    for inputs in [positive_ltv, zero_ltv, negative_ltv] {
        assert_eq!(calculate_kpis(&inputs).cac_ltv_ratio, 0.0);
    }
    assert_eq!(calculate_kpis(&negative_ltv).ltv, -600.0);
}

#[test]
fn test_zero_unit_cost_does_not_change_ratio_rule() {
    let inputs = FinancialInputs::new(100.0, 0.0, 1000.0, 50.0, 10.0, 4.0);
    let kpis = calculate_kpis(&inputs);

    assert_eq!(kpis.unit_margin, 100.0);
    assert_eq!(kpis.ltv, 400.0);
    assert_eq!(kpis.cac_ltv_ratio, 0.125);
}

#[test]
fn test_negative_margin_kept_and_ratio_infinite() {
    let inputs = FinancialInputs::new(40.0, 60.0, 500.0, 10.0, 10.0, 6.0);
    let kpis = calculate_kpis(&inputs);

    assert_eq!(kpis.unit_margin, -20.0);
    assert_eq!(kpis.ltv, -120.0);
    assert!(kpis.cac_ltv_ratio.is_infinite());
    assert!(!kpis.break_even_reachable);
}

#[test]
fn test_malformed_inputs_are_coerced_to_zero() {
    let inputs = FinancialInputs::new(f64::NAN, -5.0, f64::INFINITY, f64::NEG_INFINITY, 10.0, 3.0);
    let sanitized = sanitize_inputs(&inputs);

    assert_eq!(
        sanitized.coerced_fields,
        vec![
            "averagePrice",
            "costPerUnit",
            "fixedCosts",
            "customerAcquisitionCost"
        ]
    );
    assert!(!sanitized.is_clean());
    assert_eq!(sanitized.inputs, FinancialInputs::new(0.0, 0.0, 0.0, 0.0, 10.0, 3.0));

    let kpis = calculate_kpis(&inputs);
    assert_eq!(kpis.unit_margin, 0.0);
    assert_eq!(kpis.monthly_revenue, 0.0);
    assert_eq!(kpis.monthly_profit, 0.0);
    assert_eq!(kpis.cac_ltv_ratio, 0.0);
}

#[test]
fn test_clean_inputs_report_no_coercion() {
    assert!(sanitize_inputs(&healthy_inputs()).is_clean());
    // Zero is valid input, not a coercion
    assert!(sanitize_inputs(&FinancialInputs::default()).is_clean());
}

#[test]
fn test_all_zero_inputs_degrade_to_zero_metrics() {
    let kpis = calculate_kpis(&FinancialInputs::default());

    assert_eq!(kpis.unit_margin, 0.0);
    assert_eq!(kpis.monthly_revenue, 0.0);
    assert_eq!(kpis.monthly_profit, 0.0);
    assert_eq!(kpis.ltv, 0.0);
    assert_eq!(kpis.cac, 0.0);
    assert_eq!(kpis.cac_ltv_ratio, 0.0);
    assert_eq!(kpis.break_even_units, 0.0);
    assert_eq!(kpis.break_even_months, 0.0);
}

#[test]
fn test_overflowing_inputs_stay_finite() {
    let inputs = FinancialInputs::new(f64::MAX, 0.0, 0.0, 1.0, f64::MAX, f64::MAX);
    let kpis = calculate_kpis(&inputs);

    assert!(kpis.is_finite());
    assert!(!kpis.cac_ltv_ratio.is_nan());
    assert_ratio_matches_reported_values(&kpis);
}

fn assert_ratio_matches_reported_values(kpis: &lean_canvas::models::KpiResults) {
    if kpis.cac == 0.0 {
        assert_eq!(kpis.cac_ltv_ratio, 0.0);
    } else if kpis.ltv <= 0.0 {
        assert!(kpis.cac_ltv_ratio.is_infinite());
    } else {
        assert_close(kpis.cac_ltv_ratio, kpis.cac / kpis.ltv);
    }
}

#[test]
fn test_overflowed_ltv_reports_zero_with_infinite_ratio() {
    let inputs = FinancialInputs::new(1e308, 0.0, 0.0, 25.0, 1.0, 10.0);
    let kpis = calculate_kpis(&inputs);

    assert_eq!(kpis.ltv, 0.0);
    assert_eq!(kpis.cac, 25.0);
    assert!(kpis.cac_ltv_ratio.is_infinite());
    assert_ratio_matches_reported_values(&kpis);
}

#[test]
fn test_ratio_consistent_with_reported_ltv_and_cac() {
    for inputs in [
        healthy_inputs(),
        zero_fixed_costs_inputs(),
        zero_margin_inputs(),
        zero_lifetime_inputs(),
        cac_exceeds_ltv_inputs(),
        FinancialInputs::new(1e308, 0.0, 0.0, 25.0, 1.0, 10.0),
        FinancialInputs::new(f64::MAX, 0.0, 0.0, 1.0, f64::MAX, f64::MAX),
    ] {
        assert_ratio_matches_reported_values(&calculate_kpis(&inputs));
    }
}
