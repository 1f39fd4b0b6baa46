// ABOUTME: Health classifier mapping KPIs to profitability, LTV/CAC and overall tiers
// ABOUTME: Threshold values come from HealthThresholds so deployments can tune them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Three-tier health classification

use crate::config::HealthThresholds;
use lean_canvas_core::models::{HealthClassification, HealthTier, KpiResults};

/// Profitability tier: a non-positive unit margin is always `bad`; a
/// positive margin with a small monthly loss is `medium`
#[must_use]
pub fn classify_profitability(kpis: &KpiResults, thresholds: &HealthThresholds) -> HealthTier {
    if kpis.unit_margin <= 0.0 {
        return HealthTier::Bad;
    }
    if kpis.monthly_profit > 0.0 {
        return HealthTier::Good;
    }

    let loss_threshold = (kpis.monthly_revenue * thresholds.loss_tolerance_revenue_share)
        .min(thresholds.loss_tolerance_cap);
    if kpis.monthly_profit.abs() <= loss_threshold {
        HealthTier::Medium
    } else {
        HealthTier::Bad
    }
}

/// LTV/CAC tier from the inverted `cac_ltv_ratio`
#[must_use]
pub fn classify_ltv_cac(kpis: &KpiResults, thresholds: &HealthThresholds) -> HealthTier {
    if kpis.cac_ltv_ratio == 0.0 && thresholds.treat_free_acquisition_as_optimal {
        return HealthTier::Good;
    }

    let ltv_cac_ratio = kpis.ltv_cac_ratio();
    if ltv_cac_ratio >= thresholds.ltv_cac_good_ratio {
        HealthTier::Good
    } else if ltv_cac_ratio >= thresholds.ltv_cac_medium_ratio {
        HealthTier::Medium
    } else {
        HealthTier::Bad
    }
}

/// Combine the two tiers; paying more for a customer than they return overrides everything
#[must_use]
pub fn classify_overall(
    kpis: &KpiResults,
    profitability: HealthTier,
    ltv_cac: HealthTier,
) -> HealthTier {
    if kpis.cac > kpis.ltv && kpis.ltv > 0.0 {
        return HealthTier::Bad;
    }

    match (profitability, ltv_cac) {
        (HealthTier::Good, HealthTier::Good) => HealthTier::Good,
        (HealthTier::Bad, _) | (_, HealthTier::Bad) => HealthTier::Bad,
        _ => HealthTier::Medium,
    }
}

/// Classify all three tiers
#[must_use]
pub fn classify_health(kpis: &KpiResults, thresholds: &HealthThresholds) -> HealthClassification {
    let profitability_health = classify_profitability(kpis, thresholds);
    let ltv_cac_health = classify_ltv_cac(kpis, thresholds);
    HealthClassification {
        profitability_health,
        ltv_cac_health,
        overall_health: classify_overall(kpis, profitability_health, ltv_cac_health),
    }
}
