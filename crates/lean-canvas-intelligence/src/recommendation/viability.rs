// ABOUTME: Viability recommendation keyed off the profitability tier
// ABOUTME: Distinguishes per-customer losses from volume and fixed-cost driven losses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use super::format::{amount, one_decimal, whole};
use super::RecommendationContext;
use lean_canvas_core::models::{
    HealthTier, Recommendation, RecommendationStatus, RecommendationType,
};

pub(super) fn recommend(ctx: &RecommendationContext<'_>) -> Recommendation {
    match ctx.health.profitability_health {
        HealthTier::Good => profitable(ctx),
        HealthTier::Medium => near_break_even(ctx),
        HealthTier::Bad => losing_money(ctx),
    }
}

fn profitable(ctx: &RecommendationContext<'_>) -> Recommendation {
    let kpis = ctx.kpis;
    let margin_pct = if kpis.monthly_revenue > 0.0 {
        kpis.monthly_profit / kpis.monthly_revenue * 100.0
    } else {
        0.0
    };

    Recommendation::new(
        RecommendationType::Viability,
        "Negocio rentable",
        format!(
            "Tu modelo genera un margen de beneficio del <strong>{}%</strong>: \
             <strong>{}</strong> de beneficio mensual sobre <strong>{}</strong> de ingresos.",
            one_decimal(margin_pct),
            amount(kpis.monthly_profit),
            amount(kpis.monthly_revenue),
        ),
        RecommendationStatus::Positive,
    )
}

fn near_break_even(ctx: &RecommendationContext<'_>) -> Recommendation {
    let kpis = ctx.kpis;
    let loss = ctx.monthly_loss();
    let net_contribution = ctx.net_contribution_per_customer();

    let message = if net_contribution > 0.0 {
        let extra_sales = (loss / net_contribution).ceil();
        format!(
            "Pierdes <strong>{}</strong> al mes, una cifra pequeña frente a tus ingresos. \
             Cada cliente nuevo aporta {} netos tras pagar su adquisición: con \
             <strong>{} ventas adicionales</strong> al mes cerrarías la brecha.",
            amount(loss),
            amount(net_contribution),
            whole(extra_sales),
        )
    } else {
        let max_cac = (kpis.unit_margin * ctx.thresholds.cac_ceiling_margin_share)
            .floor()
            .max(0.0);
        format!(
            "Pierdes <strong>{}</strong> al mes. Adquirir un cliente cuesta {} y su margen es \
             de {}, así que vender más no cierra la brecha. Reduce tu CAC a un máximo de \
             <strong>{}</strong> por cliente.",
            amount(loss),
            amount(kpis.cac),
            amount(kpis.unit_margin),
            whole(max_cac),
        )
    };

    Recommendation::new(
        RecommendationType::Viability,
        "Cerca del punto de equilibrio",
        message,
        RecommendationStatus::Warning,
    )
}

fn losing_money(ctx: &RecommendationContext<'_>) -> Recommendation {
    let kpis = ctx.kpis;

    if kpis.cac > kpis.unit_margin {
        return per_customer_loss(ctx);
    }

    if kpis.unit_margin <= 0.0 {
        return Recommendation::new(
            RecommendationType::Viability,
            "Margen unitario insuficiente",
            format!(
                "Tu precio ({}) no supera el coste por unidad ({}). Ningún volumen de ventas \
                 hará rentable el negocio: <strong>sube el precio o reduce el coste \
                 unitario</strong>.",
                amount(ctx.inputs.average_price),
                amount(ctx.inputs.cost_per_unit),
            ),
            RecommendationStatus::Negative,
        );
    }

    let loss = ctx.monthly_loss();
    let fixed_costs = ctx.inputs.fixed_costs;
    let sales_fix = sales_increase_text(ctx, loss);

    let message = if fixed_costs <= 0.0 {
        format!(
            "Pierdes <strong>{}</strong> al mes sin tener costes fijos: la pérdida proviene de \
             los costes variables y del CAC, así que {sales_fix}",
            amount(loss),
        )
    } else if loss <= fixed_costs {
        let reduction_pct = loss / fixed_costs * 100.0;
        format!(
            "Pierdes <strong>{}</strong> al mes. Reducir tus costes fijos un \
             <strong>{}%</strong> eliminaría la pérdida. Como alternativa, {sales_fix}",
            amount(loss),
            one_decimal(reduction_pct),
        )
    } else {
        format!(
            "Pierdes <strong>{}</strong> al mes, más que tus costes fijos ({}). Incluso \
             eliminando todos los costes fijos quedaría un déficit de <strong>{}</strong>, \
             así que {sales_fix}",
            amount(loss),
            amount(fixed_costs),
            amount(loss - fixed_costs),
        )
    };

    Recommendation::new(
        RecommendationType::Viability,
        "Negocio con pérdidas",
        message,
        RecommendationStatus::Negative,
    )
}

fn per_customer_loss(ctx: &RecommendationContext<'_>) -> Recommendation {
    let kpis = ctx.kpis;
    let loss_per_customer = kpis.cac - kpis.unit_margin;

    let remedy = if kpis.unit_margin > 0.0 {
        let ceiling = (kpis.unit_margin * ctx.thresholds.cac_ceiling_margin_share_critical).floor();
        format!(
            "Reduce tu CAC por debajo de <strong>{}</strong> o sube el precio antes de seguir \
             creciendo.",
            whole(ceiling),
        )
    } else {
        format!(
            "Tu precio no cubre ni el coste unitario ({}): súbelo antes de invertir en \
             adquisición.",
            amount(ctx.inputs.cost_per_unit),
        )
    };

    Recommendation::new(
        RecommendationType::Viability,
        "Alerta crítica: cada cliente genera pérdidas",
        format!(
            "<strong>ALERTA CRÍTICA:</strong> adquirir un cliente cuesta {} y su margen es de \
             {}, así que pierdes <strong>{} por cada cliente</strong> antes de contar los \
             costes fijos. <strong>Aumentar el volumen de ventas empeorará las \
             pérdidas.</strong> {remedy}",
            amount(kpis.cac),
            amount(kpis.unit_margin),
            amount(loss_per_customer),
        ),
        RecommendationStatus::Negative,
    )
}

fn sales_increase_text(ctx: &RecommendationContext<'_>, loss: f64) -> String {
    let net_contribution = ctx.net_contribution_per_customer();
    if net_contribution > 0.0 {
        format!(
            "necesitarías <strong>{} ventas adicionales</strong> al mes para cubrir la pérdida.",
            whole((loss / net_contribution).ceil()),
        )
    } else {
        let max_cac = (ctx.kpis.unit_margin * ctx.thresholds.cac_ceiling_margin_share)
            .floor()
            .max(0.0);
        format!(
            "vender más no ayuda mientras el CAC iguale al margen; bájalo a \
             <strong>{}</strong> o menos.",
            whole(max_cac),
        )
    }
}
