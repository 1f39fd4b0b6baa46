// ABOUTME: Financial analysis service running the KPI engine with structured tracing
// ABOUTME: Reports coerced inputs, records tiers as span fields, flattens results for storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::storage::StoredCalculation;
use lean_canvas_core::models::{CalculationResult, FinancialInputs, HealthTier};
use lean_canvas_intelligence::{sanitize_inputs, Clock, FinancialEngine, SystemClock};
use std::time::Instant;
use tracing::{info, info_span, warn};

/// Runs calculations for callers and logs what the engine keeps silent about
#[derive(Debug, Clone)]
pub struct FinancialAnalysisService<C: Clock = SystemClock> {
    engine: FinancialEngine<C>,
    storage_sentinel: f64,
}

impl FinancialAnalysisService {
    /// Build from the loaded application configuration
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            engine: FinancialEngine::with_config(config.engine.clone()),
            storage_sentinel: config.storage_sentinel,
        }
    }
}

impl<C: Clock> FinancialAnalysisService<C> {
    /// Wrap an existing engine
    #[must_use]
    pub const fn new(engine: FinancialEngine<C>, storage_sentinel: f64) -> Self {
        Self {
            engine,
            storage_sentinel,
        }
    }

    /// Underlying engine
    #[must_use]
    pub const fn engine(&self) -> &FinancialEngine<C> {
        &self.engine
    }

    fn report_coerced(inputs: &FinancialInputs, scenario: Option<usize>) {
        let sanitized = sanitize_inputs(inputs);
        if !sanitized.is_clean() {
            warn!(
                scenario,
                fields = ?sanitized.coerced_fields,
                "Malformed financial inputs treated as 0"
            );
        }
    }

    /// Calculate metrics for one set of inputs
    #[must_use]
    pub fn analyze(&self, inputs: &FinancialInputs) -> CalculationResult {
        let span = info_span!(
            "financial_analysis",
            profitability = tracing::field::Empty,
            ltv_cac = tracing::field::Empty,
            overall = tracing::field::Empty,
        );
        let _guard = span.enter();

        Self::report_coerced(inputs, None);
        let started = Instant::now();
        let result = self.engine.calculate(inputs);

        span.record("profitability", result.health.profitability_health.as_str());
        span.record("ltv_cac", result.health.ltv_cac_health.as_str());
        span.record("overall", result.health.overall_health.as_str());
        info!(
            unit_margin = result.kpis.unit_margin,
            monthly_profit = result.kpis.monthly_profit,
            ltv = result.kpis.ltv,
            cac_ltv_ratio = result.kpis.cac_ltv_ratio,
            break_even_reachable = result.kpis.break_even_reachable,
            recommendations = result.recommendations.len(),
            elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            "Financial metrics calculated"
        );

        result
    }

    /// Calculate metrics for several what-if scenarios, in input order
    #[must_use]
    pub fn analyze_scenarios(&self, scenarios: &[FinancialInputs]) -> Vec<CalculationResult> {
        let span = info_span!("scenario_analysis", scenarios = scenarios.len());
        let _guard = span.enter();

        for (index, inputs) in scenarios.iter().enumerate() {
            Self::report_coerced(inputs, Some(index + 1));
        }

        let started = Instant::now();
        let results = self.engine.calculate_many(scenarios);
        let healthy = results
            .iter()
            .filter(|result| result.health.overall_health == HealthTier::Good)
            .count();

        info!(
            scenarios = results.len(),
            healthy,
            elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            "Scenario batch calculated"
        );

        results
    }

    /// Flatten a result for persistence using the configured sentinel
    ///
    /// # Errors
    ///
    /// Returns an error if the recommendations cannot be serialized
    pub fn to_stored(&self, result: &CalculationResult) -> AppResult<StoredCalculation> {
        StoredCalculation::from_result(result, self.storage_sentinel)
    }

    /// Sentinel used for non-finite values when persisting
    #[must_use]
    pub const fn storage_sentinel(&self) -> f64 {
        self.storage_sentinel
    }
}
