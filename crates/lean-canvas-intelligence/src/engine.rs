// ABOUTME: Financial engine composing calculator, classifier and recommendation generator
// ABOUTME: Holds configuration and an injectable clock; evaluates scenario batches in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Engine entry points
//!
//! The pipeline is calculator, then classifier, then recommender. Nothing
//! is shared between calls, so one engine can serve any number of threads.

use crate::clock::{Clock, SystemClock};
use crate::config::FinancialEngineConfig;
use crate::health_classifier;
use crate::kpi_calculator::{self, calculate_sanitized, sanitize_inputs};
use crate::recommendation;
use lean_canvas_core::constants::engine::CALCULATION_VERSION;
use lean_canvas_core::models::{
    CalculationResult, FinancialInputs, HealthClassification, KpiResults, Recommendation,
};
use rayon::prelude::*;
use tracing::debug;

/// Financial KPI engine with configurable thresholds and time source
#[derive(Debug, Clone)]
pub struct FinancialEngine<C: Clock = SystemClock> {
    config: FinancialEngineConfig,
    clock: C,
}

impl Default for FinancialEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FinancialEngine {
    /// Create an engine with the canonical rules and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FinancialEngineConfig::default(),
            clock: SystemClock,
        }
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub const fn with_config(config: FinancialEngineConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> FinancialEngine<C> {
    /// Create an engine with custom configuration and clock
    #[must_use]
    pub const fn with_clock(config: FinancialEngineConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &FinancialEngineConfig {
        &self.config
    }

    /// Derive the eight KPIs
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn calculate_kpis(&self, inputs: &FinancialInputs) -> KpiResults {
        kpi_calculator::calculate_kpis(inputs)
    }

    /// Classify the KPIs into health tiers
    #[must_use]
    pub fn classify_health(&self, kpis: &KpiResults) -> HealthClassification {
        health_classifier::classify_health(kpis, &self.config.health)
    }

    /// Produce the ordered advisory list
    #[must_use]
    pub fn generate_recommendations(
        &self,
        kpis: &KpiResults,
        health: &HealthClassification,
        inputs: &FinancialInputs,
    ) -> Vec<Recommendation> {
        recommendation::generate_recommendations(
            kpis,
            health,
            inputs,
            &self.config.recommendations,
        )
    }

    /// Run the full pipeline
    #[must_use]
    pub fn calculate(&self, inputs: &FinancialInputs) -> CalculationResult {
        let sanitized = sanitize_inputs(inputs);
        if !sanitized.is_clean() {
            debug!(fields = ?sanitized.coerced_fields, "coerced malformed financial inputs to zero");
        }

        let kpis = calculate_sanitized(&sanitized.inputs);
        let health = self.classify_health(&kpis);
        let recommendations = self.generate_recommendations(&kpis, &health, &sanitized.inputs);

        debug!(
            unit_margin = kpis.unit_margin,
            monthly_profit = kpis.monthly_profit,
            ltv = kpis.ltv,
            cac_ltv_ratio = kpis.cac_ltv_ratio,
            overall = %health.overall_health,
            recommendations = recommendations.len(),
            "financial metrics calculated"
        );

        CalculationResult {
            kpis,
            health,
            recommendations,
            calculated_at: self.clock.now(),
            calculation_version: CALCULATION_VERSION.to_owned(),
        }
    }

    /// Evaluate several scenarios in parallel, preserving input order
    #[must_use]
    pub fn calculate_many(&self, scenarios: &[FinancialInputs]) -> Vec<CalculationResult> {
        scenarios
            .par_iter()
            .map(|inputs| self.calculate(inputs))
            .collect()
    }
}

/// Derive the KPIs with the canonical rules
#[must_use]
pub fn calculate_kpis(inputs: &FinancialInputs) -> KpiResults {
    kpi_calculator::calculate_kpis(inputs)
}

/// Classify KPIs with the canonical thresholds
#[must_use]
pub fn classify_health(kpis: &KpiResults) -> HealthClassification {
    health_classifier::classify_health(kpis, &FinancialEngineConfig::default().health)
}

/// Generate recommendations with the canonical multipliers
#[must_use]
pub fn generate_recommendations(
    kpis: &KpiResults,
    health: &HealthClassification,
    inputs: &FinancialInputs,
) -> Vec<Recommendation> {
    recommendation::generate_recommendations(
        kpis,
        health,
        inputs,
        &FinancialEngineConfig::default().recommendations,
    )
}

/// Single entry point for callers: inputs in, complete result out
#[must_use]
pub fn calculate_financial_metrics(inputs: &FinancialInputs) -> CalculationResult {
    FinancialEngine::new().calculate(inputs)
}
