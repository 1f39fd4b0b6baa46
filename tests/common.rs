// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and the reference canvas scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `lean_canvas`

use chrono::{DateTime, TimeZone, Utc};
use lean_canvas::intelligence::{FinancialEngine, FinancialEngineConfig, FixedClock};
use lean_canvas::models::{FinancialInputs, KpiResults, Recommendation, RecommendationType};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Healthy canvas: margin 50, profit 250, LTV 600
pub const fn healthy_inputs() -> FinancialInputs {
    FinancialInputs::new(100.0, 50.0, 1000.0, 25.0, 50.0, 12.0)
}

/// Healthy canvas without fixed costs
pub const fn zero_fixed_costs_inputs() -> FinancialInputs {
    FinancialInputs::new(100.0, 50.0, 0.0, 25.0, 50.0, 12.0)
}

/// Price equal to unit cost
pub const fn zero_margin_inputs() -> FinancialInputs {
    FinancialInputs::new(100.0, 100.0, 1000.0, 25.0, 50.0, 12.0)
}

/// Customers churn immediately
pub const fn zero_lifetime_inputs() -> FinancialInputs {
    FinancialInputs::new(100.0, 50.0, 1000.0, 25.0, 50.0, 0.0)
}

/// CAC of 50 against an LTV of 12
pub const fn cac_exceeds_ltv_inputs() -> FinancialInputs {
    FinancialInputs::new(7.0, 5.0, 570.0, 50.0, 20.0, 6.0)
}

/// Monthly loss of 50 on 5000 revenue, net contribution 25 per customer
pub const fn near_break_even_inputs() -> FinancialInputs {
    FinancialInputs::new(100.0, 50.0, 1300.0, 25.0, 50.0, 12.0)
}

/// Monthly loss of 1750, below the 3000 fixed costs
pub const fn fixed_cost_loss_inputs() -> FinancialInputs {
    FinancialInputs::new(100.0, 50.0, 3000.0, 25.0, 50.0, 12.0)
}

/// Break-even 40 months away
pub const fn distant_break_even_inputs() -> FinancialInputs {
    FinancialInputs::new(100.0, 50.0, 100_000.0, 10.0, 50.0, 6.0)
}

/// Timestamp used by deterministic engines
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Engine with default thresholds and a frozen clock
pub fn fixed_engine() -> FinancialEngine<FixedClock> {
    FinancialEngine::with_clock(FinancialEngineConfig::default(), FixedClock(fixed_instant()))
}

/// KPIs built field by field for classifier tests
#[allow(clippy::too_many_arguments)]
pub const fn kpis(
    unit_margin: f64,
    monthly_revenue: f64,
    monthly_profit: f64,
    ltv: f64,
    cac: f64,
    cac_ltv_ratio: f64,
) -> KpiResults {
    KpiResults {
        unit_margin,
        monthly_revenue,
        monthly_profit,
        ltv,
        cac,
        cac_ltv_ratio,
        break_even_units: 0.0,
        break_even_months: 0.0,
        break_even_reachable: true,
    }
}

/// First recommendation of a given type
pub fn find(recommendations: &[Recommendation], kind: RecommendationType) -> Option<&Recommendation> {
    recommendations
        .iter()
        .find(|rec| rec.recommendation_type == kind)
}

/// Recommendation types in emitted order
pub fn kinds(recommendations: &[Recommendation]) -> Vec<RecommendationType> {
    recommendations
        .iter()
        .map(|rec| rec.recommendation_type)
        .collect()
}
