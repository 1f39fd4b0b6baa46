// ABOUTME: Prioritized next-step action items joined into a single recommendation
// ABOUTME: Covers CAC reduction, closing a monthly loss, and customer retention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use super::format::{amount, one_decimal, share, whole};
use super::RecommendationContext;
use lean_canvas_core::models::{
    HealthTier, Recommendation, RecommendationStatus, RecommendationType,
};

const PARAGRAPH_BREAK: &str = "\n\n";

pub(super) fn recommend(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    let actions: Vec<String> = [
        reduce_cac(ctx),
        close_monthly_loss(ctx),
        improve_retention(ctx),
    ]
    .into_iter()
    .flatten()
    .collect();

    if actions.is_empty() {
        return None;
    }

    let message = actions
        .iter()
        .enumerate()
        .map(|(index, action)| format!("{}. {action}", index + 1))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK);

    Some(Recommendation::new(
        RecommendationType::NextSteps,
        "Próximos pasos",
        message,
        RecommendationStatus::Neutral,
    ))
}

/// Worst sub-case first: CAC above LTV, then CAC above margin, then a 3:1 target
fn reduce_cac(ctx: &RecommendationContext<'_>) -> Option<String> {
    if ctx.health.ltv_cac_health != HealthTier::Bad {
        return None;
    }

    let kpis = ctx.kpis;
    let thresholds = ctx.thresholds;
    let action = if kpis.cac > kpis.ltv {
        let target = (kpis.ltv.max(0.0) * thresholds.cac_ceiling_ltv_share).floor();
        format!(
            "<strong>Reduce tu CAC a {} o menos.</strong> Hoy pagas {} por un cliente que \
             solo genera {} de LTV.",
            whole(target),
            amount(kpis.cac),
            amount(kpis.ltv),
        )
    } else if kpis.cac > kpis.unit_margin {
        let target = (kpis.unit_margin.max(0.0) * thresholds.cac_ceiling_margin_share).floor();
        format!(
            "<strong>Reduce tu CAC a {} o menos</strong> para recuperarlo con la primera \
             venta de cada cliente.",
            whole(target),
        )
    } else {
        let target = (kpis.ltv.max(0.0) / thresholds.target_ltv_cac_ratio).floor();
        format!(
            "<strong>Reduce tu CAC a {} o menos</strong> para alcanzar un ratio LTV:CAC de \
             {}:1.",
            whole(target),
            whole(thresholds.target_ltv_cac_ratio),
        )
    };
    Some(action)
}

fn close_monthly_loss(ctx: &RecommendationContext<'_>) -> Option<String> {
    let kpis = ctx.kpis;
    if kpis.monthly_profit >= 0.0 {
        return None;
    }

    let loss = ctx.monthly_loss();
    if kpis.cac > kpis.unit_margin {
        return Some(format!(
            "<strong>Pausa la adquisición de pago.</strong> Cada cliente nuevo aumenta tu \
             pérdida mensual en {}.",
            amount(kpis.cac - kpis.unit_margin),
        ));
    }

    let net_contribution = ctx.net_contribution_per_customer();
    let action = if net_contribution > 0.0 {
        format!(
            "<strong>Consigue {} ventas adicionales al mes</strong> para cubrir la pérdida de \
             {} y alcanzar el punto de equilibrio.",
            whole((loss / net_contribution).ceil()),
            amount(loss),
        )
    } else if kpis.unit_margin > 0.0 {
        let target = (kpis.unit_margin * ctx.thresholds.cac_ceiling_margin_share).floor();
        format!(
            "<strong>Reduce tu CAC a {} o menos.</strong> Con el CAC actual cada venta \
             adicional no aporta nada neto, así que más volumen no cubrirá la pérdida de {}.",
            whole(target),
            amount(loss),
        )
    } else {
        format!(
            "<strong>Sube el precio por encima de {}.</strong> Sin margen unitario ningún \
             volumen cubrirá la pérdida de {}.",
            amount(ctx.inputs.cost_per_unit),
            amount(loss),
        )
    };
    Some(action)
}

fn improve_retention(ctx: &RecommendationContext<'_>) -> Option<String> {
    let thresholds = ctx.thresholds;
    let lifetime = ctx.inputs.average_customer_lifetime;
    if lifetime >= thresholds.retention_lifetime_threshold_months {
        return None;
    }

    if lifetime <= 0.0 {
        return Some(
            "<strong>Mide y mejora la retención.</strong> Sin una vida media de cliente \
             positiva el LTV es 0."
                .to_owned(),
        );
    }

    let improvement = thresholds.retention_lifetime_improvement;
    let target_lifetime = lifetime * (1.0 + improvement);
    let ltv_gain = (ctx.kpis.unit_margin * lifetime * improvement).max(0.0);
    Some(format!(
        "<strong>Mejora la retención.</strong> Alargar la vida media del cliente de {} a {} \
         meses (+{}%) aumentaría el LTV en {} por cliente.",
        amount(lifetime),
        one_decimal(target_lifetime),
        share(improvement),
        amount(ltv_gain),
    ))
}
