// ABOUTME: Recommendation generator turning KPIs and health tiers into advisory messages
// ABOUTME: Emits viability, acquisition, optional optimization and optional next steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Recommendation generation
//!
//! Entries are produced in a fixed order: viability and acquisition are
//! always present, optimization and next steps only when they apply. Every
//! division is guarded, so degenerate inputs still yield messages.

mod acquisition;
mod format;
mod next_steps;
mod optimization;
mod viability;

use crate::config::RecommendationThresholds;
use crate::kpi_calculator::sanitize_inputs;
use lean_canvas_core::models::{FinancialInputs, HealthClassification, KpiResults, Recommendation};

/// Everything a section builder may read
pub(crate) struct RecommendationContext<'a> {
    pub kpis: &'a KpiResults,
    pub health: &'a HealthClassification,
    pub inputs: FinancialInputs,
    pub thresholds: &'a RecommendationThresholds,
}

impl RecommendationContext<'_> {
    /// Margin left per new customer once acquisition is paid
    pub fn net_contribution_per_customer(&self) -> f64 {
        self.kpis.unit_margin - self.kpis.cac
    }

    /// Monthly loss as a positive amount (`0` when profitable)
    pub fn monthly_loss(&self) -> f64 {
        if self.kpis.monthly_profit < 0.0 {
            self.kpis.monthly_profit.abs()
        } else {
            0.0
        }
    }
}

/// Generate the ordered advisory list for one calculation
#[must_use]
pub fn generate_recommendations(
    kpis: &KpiResults,
    health: &HealthClassification,
    inputs: &FinancialInputs,
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    let ctx = RecommendationContext {
        kpis,
        health,
        inputs: sanitize_inputs(inputs).inputs,
        thresholds,
    };

    let mut recommendations = Vec::with_capacity(4);
    recommendations.push(viability::recommend(&ctx));
    recommendations.push(acquisition::recommend(&ctx));
    recommendations.extend(optimization::recommend(&ctx));
    recommendations.extend(next_steps::recommend(&ctx));
    recommendations
}
