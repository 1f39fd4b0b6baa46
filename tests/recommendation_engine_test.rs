// ABOUTME: Integration tests for the recommendation generator
// ABOUTME: Covers every viability, acquisition, optimization and next-step branch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    cac_exceeds_ltv_inputs, distant_break_even_inputs, find, fixed_cost_loss_inputs,
    healthy_inputs, init_test_logging, kinds, kpis, near_break_even_inputs,
    zero_lifetime_inputs, zero_margin_inputs,
};
use lean_canvas::intelligence::{calculate_financial_metrics, generate_recommendations};
use lean_canvas::models::{
    FinancialInputs, HealthClassification, HealthTier, Recommendation, RecommendationStatus,
    RecommendationType,
};

fn recommendations_for(inputs: &FinancialInputs) -> Vec<Recommendation> {
    calculate_financial_metrics(inputs).recommendations
}

fn message(recommendations: &[Recommendation], kind: RecommendationType) -> String {
    find(recommendations, kind)
        .map(|rec| rec.message.clone())
        .unwrap_or_else(|| panic!("missing {kind:?} recommendation"))
}

const fn health(
    profitability_health: HealthTier,
    ltv_cac_health: HealthTier,
    overall_health: HealthTier,
) -> HealthClassification {
    HealthClassification {
        profitability_health,
        ltv_cac_health,
        overall_health,
    }
}

#[test]
fn test_healthy_canvas_recommendations() {
    init_test_logging();
    let recs = recommendations_for(&healthy_inputs());

    assert_eq!(
        kinds(&recs),
        vec![
            RecommendationType::Viability,
            RecommendationType::Acquisition,
            RecommendationType::Optimization,
        ]
    );

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert_eq!(viability.title, "Negocio rentable");
    assert_eq!(viability.status, RecommendationStatus::Positive);
    assert!(viability.message.contains("<strong>5.0%</strong>"));
    assert!(viability.message.contains("<strong>250</strong>"));
    assert!(viability.message.contains("<strong>5000</strong>"));

    let acquisition = find(&recs, RecommendationType::Acquisition).unwrap();
    assert_eq!(acquisition.title, "Eficiencia de adquisición");
    assert_eq!(acquisition.status, RecommendationStatus::Positive);
    assert!(acquisition.message.contains("<strong>24.0:1</strong>"));
    assert!(acquisition.message.contains("<strong>2 semanas</strong>"));

    let optimization = find(&recs, RecommendationType::Optimization).unwrap();
    assert_eq!(optimization.title, "Oportunidad de crecimiento");
    assert_eq!(optimization.status, RecommendationStatus::Positive);
    assert!(optimization.message.contains("70%"));
    assert!(optimization.message.contains("<strong>175</strong>"));
    assert!(optimization.message.contains("<strong>7 clientes adicionales</strong>"));
}

#[test]
fn test_cac_exceeds_ltv_raises_critical_alert() {
    let recs = recommendations_for(&cac_exceeds_ltv_inputs());

    assert_eq!(
        kinds(&recs),
        vec![
            RecommendationType::Viability,
            RecommendationType::Acquisition,
            RecommendationType::NextSteps,
        ]
    );

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert_eq!(viability.title, "Alerta crítica: cada cliente genera pérdidas");
    assert_eq!(viability.status, RecommendationStatus::Negative);
    assert!(viability.message.starts_with("<strong>ALERTA CRÍTICA:</strong>"));
    assert!(viability.message.contains("<strong>48 por cada cliente</strong>"));
    assert!(viability
        .message
        .contains("Aumentar el volumen de ventas empeorará las pérdidas"));
    assert!(viability.message.contains("por debajo de <strong>1</strong>"));

    let acquisition = find(&recs, RecommendationType::Acquisition).unwrap();
    assert_eq!(acquisition.status, RecommendationStatus::Negative);
    assert!(acquisition.message.contains("<strong>0.2:1</strong>"));
    assert!(acquisition.message.contains("<strong>38 por cliente</strong>"));
    assert!(acquisition.message.contains("Pausa la adquisición"));
    assert!(acquisition.message.contains("máximo de <strong>9</strong>"));

    let next_steps = message(&recs, RecommendationType::NextSteps);
    let items: Vec<&str> = next_steps.split("\n\n").collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].starts_with("1. <strong>Reduce tu CAC a 9 o menos.</strong>"));
    assert!(items[1].starts_with("2. <strong>Pausa la adquisición de pago.</strong>"));
    assert!(items[1].contains("en 48."));
    assert!(items[2].starts_with("3. <strong>Mejora la retención.</strong>"));
    assert!(items[2].contains("de 6 a 9.0 meses (+50%)"));
    assert!(items[2].contains("en 6 por cliente"));
}

#[test]
fn test_near_break_even_with_positive_contribution() {
    let recs = recommendations_for(&near_break_even_inputs());

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert_eq!(viability.title, "Cerca del punto de equilibrio");
    assert_eq!(viability.status, RecommendationStatus::Warning);
    assert!(viability.message.contains("<strong>50</strong> al mes"));
    assert!(viability.message.contains("<strong>2 ventas adicionales</strong>"));

    let next_steps = message(&recs, RecommendationType::NextSteps);
    assert_eq!(
        next_steps,
        "1. <strong>Consigue 2 ventas adicionales al mes</strong> para cubrir la pérdida de \
         50 y alcanzar el punto de equilibrio."
    );
}

#[test]
fn test_near_break_even_without_contribution_caps_cac() {
    // CAC equals the unit margin: every sale nets zero
    let inputs = FinancialInputs::new(100.0, 50.0, 100.0, 50.0, 50.0, 12.0);
    let recs = recommendations_for(&inputs);

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert_eq!(viability.status, RecommendationStatus::Warning);
    assert!(viability.message.contains("máximo de <strong>45</strong>"));

    let next_steps = message(&recs, RecommendationType::NextSteps);
    assert!(next_steps.starts_with("1. <strong>Reduce tu CAC a 45 o menos.</strong>"));
}

#[test]
fn test_loss_below_fixed_costs_suggests_cut() {
    let recs = recommendations_for(&fixed_cost_loss_inputs());

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert_eq!(viability.title, "Negocio con pérdidas");
    assert_eq!(viability.status, RecommendationStatus::Negative);
    assert!(viability.message.contains("<strong>1750</strong>"));
    assert!(viability.message.contains("<strong>58.3%</strong>"));
    assert!(viability.message.contains("<strong>70 ventas adicionales</strong>"));
}

#[test]
fn test_loss_above_fixed_costs_reports_deficit() {
    let kpis = kpis(50.0, 5000.0, -800.0, 600.0, 25.0, 25.0 / 600.0);
    let inputs = FinancialInputs::new(100.0, 50.0, 500.0, 25.0, 50.0, 12.0);
    let recs = generate_recommendations(
        &kpis,
        &health(HealthTier::Bad, HealthTier::Good, HealthTier::Bad),
        &inputs,
    );

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert_eq!(viability.title, "Negocio con pérdidas");
    assert!(viability.message.contains("más que tus costes fijos (500)"));
    assert!(viability.message.contains("déficit de <strong>300</strong>"));
    assert!(viability.message.contains("<strong>32 ventas adicionales</strong>"));
}

#[test]
fn test_loss_without_fixed_costs_blames_variable_costs() {
    let kpis = kpis(50.0, 5000.0, -800.0, 600.0, 25.0, 25.0 / 600.0);
    let inputs = FinancialInputs::new(100.0, 50.0, 0.0, 25.0, 50.0, 12.0);
    let recs = generate_recommendations(
        &kpis,
        &health(HealthTier::Bad, HealthTier::Good, HealthTier::Bad),
        &inputs,
    );

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert!(viability.message.contains("sin tener costes fijos"));
    assert!(viability.message.contains("<strong>32 ventas adicionales</strong>"));
    assert!(!viability.message.contains("Reducir tus costes fijos"));
}

#[test]
fn test_zero_margin_with_paid_acquisition_is_per_customer_loss() {
    let recs = recommendations_for(&zero_margin_inputs());

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert_eq!(viability.title, "Alerta crítica: cada cliente genera pérdidas");
    assert!(viability.message.contains("no cubre ni el coste unitario (100)"));
}

#[test]
fn test_zero_margin_with_free_acquisition_is_margin_problem() {
    let inputs = FinancialInputs::new(100.0, 100.0, 1000.0, 0.0, 50.0, 12.0);
    let recs = recommendations_for(&inputs);

    let viability = find(&recs, RecommendationType::Viability).unwrap();
    assert_eq!(viability.title, "Margen unitario insuficiente");
    assert_eq!(viability.status, RecommendationStatus::Negative);
    assert!(viability.message.contains("Tu precio (100)"));

    let acquisition = find(&recs, RecommendationType::Acquisition).unwrap();
    assert!(acquisition.message.contains("<strong>gratuita</strong>"));

    let next_steps = message(&recs, RecommendationType::NextSteps);
    assert!(next_steps.contains("<strong>Sube el precio por encima de 100.</strong>"));
}

#[test]
fn test_medium_ltv_cac_gives_targets() {
    // LTV 600, CAC 250: ratio 2.4
    let inputs = FinancialInputs::new(100.0, 50.0, 0.0, 250.0, 10.0, 12.0);
    let recs = recommendations_for(&inputs);

    let acquisition = find(&recs, RecommendationType::Acquisition).unwrap();
    assert_eq!(acquisition.status, RecommendationStatus::Warning);
    assert!(acquisition.message.contains("<strong>2.4:1</strong>"));
    assert!(acquisition.message.contains("del 3:1 recomendado"));
    assert!(acquisition.message.contains("<strong>150</strong> (hasta 750)"));
    assert!(acquisition.message.contains("<strong>50</strong> (hasta 200)"));
}

#[test]
fn test_bad_ltv_cac_below_ltv_targets_half() {
    // LTV 600, CAC 400: ratio 1.5
    let inputs = FinancialInputs::new(100.0, 50.0, 0.0, 40.0, 10.0, 12.0);
    let kpis = lean_canvas::intelligence::calculate_kpis(&inputs);
    let kpis = lean_canvas::models::KpiResults {
        cac: 400.0,
        cac_ltv_ratio: 400.0 / 600.0,
        ..kpis
    };
    let recs = generate_recommendations(
        &kpis,
        &health(HealthTier::Good, HealthTier::Bad, HealthTier::Bad),
        &inputs,
    );

    let acquisition = find(&recs, RecommendationType::Acquisition).unwrap();
    assert_eq!(acquisition.status, RecommendationStatus::Negative);
    assert!(acquisition.message.contains("<strong>1.5:1</strong>"));
    assert!(acquisition.message.contains("<strong>300</strong> como máximo"));

    // CAC above margin but below LTV: second reduction sub-case
    let next_steps = message(&recs, RecommendationType::NextSteps);
    assert!(next_steps.starts_with("1. <strong>Reduce tu CAC a 45 o menos</strong>"));
}

#[test]
fn test_bad_ltv_cac_within_margin_targets_three_to_one() {
    let kpis = kpis(50.0, 5000.0, 250.0, 60.0, 40.0, 40.0 / 60.0);
    let inputs = FinancialInputs::new(100.0, 50.0, 0.0, 40.0, 50.0, 1.2);
    let recs = generate_recommendations(
        &kpis,
        &health(HealthTier::Good, HealthTier::Bad, HealthTier::Bad),
        &inputs,
    );

    let next_steps = message(&recs, RecommendationType::NextSteps);
    assert!(next_steps.starts_with("1. <strong>Reduce tu CAC a 20 o menos</strong>"));
    assert!(next_steps.contains("3:1."));
}

#[test]
fn test_zero_lifetime_recommendations() {
    let recs = recommendations_for(&zero_lifetime_inputs());

    let acquisition = find(&recs, RecommendationType::Acquisition).unwrap();
    assert!(acquisition.message.contains("<strong>0.0:1</strong>"));

    let next_steps = message(&recs, RecommendationType::NextSteps);
    assert!(next_steps.starts_with("1. <strong>Reduce tu CAC a 0 o menos.</strong>"));
    assert!(next_steps.contains("2. <strong>Mide y mejora la retención.</strong>"));
}

#[test]
fn test_distant_break_even_optimization() {
    let recs = recommendations_for(&distant_break_even_inputs());

    let optimization = find(&recs, RecommendationType::Optimization).unwrap();
    assert_eq!(optimization.title, "Punto de equilibrio lejano");
    assert_eq!(optimization.status, RecommendationStatus::Warning);
    assert!(optimization.message.contains("<strong>40.0 meses</strong>"));
    assert!(optimization.message.contains("horizonte razonable de 24 meses"));
    assert!(optimization.message.contains("<strong>1950 unidades</strong>"));
    assert!(optimization.message.contains("3900.0%"));
    assert!(optimization.message.contains("<strong>30000</strong>"));
}

#[test]
fn test_break_even_horizon_scales_with_lifetime() {
    // 40 months to break even, but customers stay 24 months: horizon is 48
    let inputs = FinancialInputs::new(100.0, 50.0, 100_000.0, 10.0, 50.0, 24.0);
    let recs = recommendations_for(&inputs);
    assert!(find(&recs, RecommendationType::Optimization).is_none());
}

#[test]
fn test_no_optimization_when_break_even_unreachable() {
    let recs = recommendations_for(&zero_margin_inputs());
    assert!(find(&recs, RecommendationType::Optimization).is_none());
}

#[test]
fn test_free_acquisition_reinvestment_message() {
    let inputs = FinancialInputs::new(100.0, 50.0, 1000.0, 0.0, 50.0, 12.0);
    let recs = recommendations_for(&inputs);

    let optimization = find(&recs, RecommendationType::Optimization).unwrap();
    assert!(optimization.message.contains("tu adquisición es gratuita"));
}

#[test]
fn test_every_recommendation_has_title_and_message() {
    let scenarios = [
        healthy_inputs(),
        near_break_even_inputs(),
        fixed_cost_loss_inputs(),
        distant_break_even_inputs(),
        zero_margin_inputs(),
        zero_lifetime_inputs(),
        cac_exceeds_ltv_inputs(),
        FinancialInputs::default(),
        FinancialInputs::new(f64::NAN, -1.0, f64::INFINITY, 5.0, 3.0, -2.0),
    ];

    for inputs in scenarios {
        let recs = recommendations_for(&inputs);
        assert!((2..=4).contains(&recs.len()), "{inputs:?}");
        assert_eq!(recs[0].recommendation_type, RecommendationType::Viability);
        assert_eq!(recs[1].recommendation_type, RecommendationType::Acquisition);
        for rec in &recs {
            assert!(!rec.title.is_empty());
            assert!(!rec.message.is_empty());
            assert!(!rec.message.contains("NaN"), "{}", rec.message);
            assert!(!rec.message.contains("inf"), "{}", rec.message);
        }
    }
}
