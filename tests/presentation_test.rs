// ABOUTME: Integration tests for display helpers
// ABOUTME: LTV:CAC labels, currency formatting, markup stripping and tier labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lean_canvas::models::HealthTier;
use lean_canvas::presentation::{
    format_currency, health_label, ltv_cac_display, render_plain, FREE_ACQUISITION_LABEL,
    NOT_AVAILABLE_LABEL,
};

#[test]
fn test_ltv_cac_display() {
    assert_eq!(ltv_cac_display(25.0 / 600.0), "24.0:1");
    assert_eq!(ltv_cac_display(0.5), "2.0:1");
    assert_eq!(ltv_cac_display(50.0 / 12.0), "0.2:1");
    assert_eq!(ltv_cac_display(0.0), FREE_ACQUISITION_LABEL);
    assert_eq!(ltv_cac_display(f64::INFINITY), NOT_AVAILABLE_LABEL);
    assert_eq!(ltv_cac_display(f64::NAN), NOT_AVAILABLE_LABEL);
    assert_eq!(ltv_cac_display(-0.5), NOT_AVAILABLE_LABEL);
}

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(1234.5), "$1,234.50");
    assert_eq!(format_currency(-1530.0), "-$1,530.00");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(999.999), "$1,000.00");
    assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    assert_eq!(format_currency(50.0), "$50.00");
    assert_eq!(format_currency(-0.001), "$0.00");
    assert_eq!(format_currency(f64::NEG_INFINITY), NOT_AVAILABLE_LABEL);
}

#[test]
fn test_render_plain_strips_emphasis() {
    assert_eq!(
        render_plain("Ganas <strong>250</strong> al mes"),
        "Ganas 250 al mes"
    );
    assert_eq!(render_plain("sin marcas"), "sin marcas");
    assert_eq!(render_plain("a < b"), "a < b");
    assert_eq!(render_plain(""), "");
}

#[test]
fn test_health_labels() {
    assert_eq!(health_label(HealthTier::Good), "Saludable");
    assert_eq!(health_label(HealthTier::Medium), "Atención");
    assert_eq!(health_label(HealthTier::Bad), "Crítico");
}
