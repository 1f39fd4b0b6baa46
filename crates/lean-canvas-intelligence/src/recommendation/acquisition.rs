// ABOUTME: Acquisition efficiency recommendation keyed off the LTV/CAC tier
// ABOUTME: Reports CAC payback time or the CAC/LTV changes needed for a healthy ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use super::format::{amount, whole};
use super::RecommendationContext;
use crate::recovery_time::format_recovery_time;
use lean_canvas_core::models::{
    HealthTier, Recommendation, RecommendationStatus, RecommendationType,
};

const TITLE: &str = "Eficiencia de adquisición";

/// LTV/CAC with one decimal, `"0"` when CAC is zero
fn display_ratio(ltv: f64, cac: f64) -> String {
    if cac > 0.0 {
        format!("{:.1}", ltv / cac)
    } else {
        "0".to_owned()
    }
}

pub(super) fn recommend(ctx: &RecommendationContext<'_>) -> Recommendation {
    let kpis = ctx.kpis;
    let ratio = display_ratio(kpis.ltv, kpis.cac);

    let (message, status) = match ctx.health.ltv_cac_health {
        HealthTier::Good if kpis.cac <= 0.0 => (
            format!(
                "Tu adquisición de clientes es <strong>gratuita</strong>: cada cliente aporta \
                 su LTV completo de {} sin coste de captación.",
                amount(kpis.ltv),
            ),
            RecommendationStatus::Positive,
        ),
        HealthTier::Good => {
            let payback_months = if kpis.unit_margin > 0.0 {
                kpis.cac / kpis.unit_margin
            } else {
                f64::INFINITY
            };
            (
                format!(
                    "Ratio LTV:CAC de <strong>{ratio}:1</strong>. Recuperas el coste de \
                     adquirir un cliente en <strong>{}</strong>.",
                    format_recovery_time(payback_months),
                ),
                RecommendationStatus::Positive,
            )
        }
        HealthTier::Medium => {
            let target = ctx.thresholds.target_ltv_cac_ratio;
            let target_ltv = kpis.cac * target;
            let target_cac = kpis.ltv / target;
            (
                format!(
                    "Ratio LTV:CAC de <strong>{ratio}:1</strong>, aceptable pero por debajo \
                     del {}:1 recomendado. Aumenta el LTV en <strong>{}</strong> (hasta {}) \
                     o reduce el CAC en <strong>{}</strong> (hasta {}).",
                    whole(target),
                    amount(target_ltv - kpis.ltv),
                    amount(target_ltv),
                    amount(kpis.cac - target_cac),
                    amount(target_cac),
                ),
                RecommendationStatus::Warning,
            )
        }
        HealthTier::Bad if kpis.cac > kpis.ltv => {
            let max_cac = (kpis.ltv.max(0.0) * ctx.thresholds.cac_ceiling_ltv_share).floor();
            (
                format!(
                    "Ratio LTV:CAC de <strong>{ratio}:1</strong>. Cada cliente cuesta {} y \
                     genera {} durante toda su vida: pierdes <strong>{} por cliente</strong>. \
                     Pausa la adquisición de pago y reduce el CAC a un máximo de \
                     <strong>{}</strong>.",
                    amount(kpis.cac),
                    amount(kpis.ltv),
                    amount(kpis.cac - kpis.ltv),
                    whole(max_cac),
                ),
                RecommendationStatus::Negative,
            )
        }
        HealthTier::Bad => {
            let target_cac = (kpis.ltv.max(0.0) / ctx.thresholds.cac_target_ltv_divisor).floor();
            (
                format!(
                    "Ratio LTV:CAC de <strong>{ratio}:1</strong>, insuficiente para crecer de \
                     forma sostenible. Reduce tu CAC a <strong>{}</strong> como máximo.",
                    whole(target_cac),
                ),
                RecommendationStatus::Negative,
            )
        }
    };

    Recommendation::new(RecommendationType::Acquisition, TITLE, message, status)
}
