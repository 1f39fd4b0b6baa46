// ABOUTME: Optimization recommendation for reinvestment or a distant break-even point
// ABOUTME: Emitted only for healthy businesses or when break-even exceeds the horizon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use super::format::{amount, one_decimal, share, whole};
use super::RecommendationContext;
use lean_canvas_core::models::{
    HealthTier, Recommendation, RecommendationStatus, RecommendationType,
};

pub(super) fn recommend(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    if ctx.health.overall_health == HealthTier::Good {
        return Some(reinvest(ctx));
    }
    distant_break_even(ctx)
}

fn reinvest(ctx: &RecommendationContext<'_>) -> Recommendation {
    let kpis = ctx.kpis;
    let reinvestment_share = ctx.thresholds.reinvestment_share;
    let budget = kpis.monthly_profit * reinvestment_share;

    let message = if kpis.cac > 0.0 {
        let extra_customers = (budget / kpis.cac).floor();
        format!(
            "Reinvierte el {}% del beneficio mensual (<strong>{}</strong>) en adquisición: al \
             CAC actual de {} conseguirías <strong>{} clientes adicionales</strong> al mes.",
            share(reinvestment_share),
            amount(budget),
            amount(kpis.cac),
            whole(extra_customers),
        )
    } else {
        format!(
            "Reinvierte el {}% del beneficio mensual (<strong>{}</strong>) en capacidad y \
             producto: tu adquisición es gratuita, así que el límite es operativo.",
            share(reinvestment_share),
            amount(budget),
        )
    };

    Recommendation::new(
        RecommendationType::Optimization,
        "Oportunidad de crecimiento",
        message,
        RecommendationStatus::Positive,
    )
}

fn distant_break_even(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    let kpis = ctx.kpis;
    let months = kpis.break_even_months;
    if !months.is_finite() || months <= 0.0 {
        return None;
    }

    let thresholds = ctx.thresholds;
    let horizon = thresholds.break_even_horizon_min_months.max(
        ctx.inputs.average_customer_lifetime * thresholds.break_even_horizon_lifetimes,
    );
    if months <= horizon {
        return None;
    }

    let customers = ctx.inputs.monthly_new_customers;
    let sales_gap = (kpis.break_even_units - customers).max(0.0).ceil();
    let growth_pct = if customers > 0.0 {
        sales_gap / customers * 100.0
    } else {
        0.0
    };
    let fixed_cost_savings = ctx.inputs.fixed_costs * thresholds.fixed_cost_reduction_share;

    Some(Recommendation::new(
        RecommendationType::Optimization,
        "Punto de equilibrio lejano",
        format!(
            "Alcanzar el punto de equilibrio te llevaría <strong>{} meses</strong>, más que el \
             horizonte razonable de {} meses. Cierra la brecha de ventas de <strong>{} \
             unidades</strong> al mes (un crecimiento del {}%) o recorta un {}% los costes \
             fijos (<strong>{}</strong> menos al mes).",
            one_decimal(months),
            amount(horizon),
            whole(sales_gap),
            one_decimal(growth_pct),
            share(thresholds.fixed_cost_reduction_share),
            amount(fixed_cost_savings),
        ),
        RecommendationStatus::Warning,
    ))
}
