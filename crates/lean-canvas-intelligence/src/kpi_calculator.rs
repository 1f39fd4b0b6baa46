// ABOUTME: KPI calculator deriving unit economics from the six financial inputs
// ABOUTME: Sanitizes malformed inputs to zero and canonicalizes non-finite results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Unit economics calculation
//!
//! The calculator is total: negative, `NaN` and infinite inputs are treated
//! as `0`, and every derived figure except `cac_ltv_ratio` is forced finite.

use lean_canvas_core::models::{FinancialInputs, KpiResults};
use tracing::debug;

/// Inputs after defensive normalization
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedInputs {
    /// Normalized values, all finite and non-negative
    pub inputs: FinancialInputs,
    /// Wire names of the fields that had to be coerced to `0`
    pub coerced_fields: Vec<&'static str>,
}

impl SanitizedInputs {
    /// True when no field was coerced
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.coerced_fields.is_empty()
    }
}

#[inline]
fn sanitize_value(value: f64) -> f64 {
    // Also folds -0.0 into 0.0
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Normalize every input, recording which ones were malformed
#[must_use]
pub fn sanitize_inputs(inputs: &FinancialInputs) -> SanitizedInputs {
    let coerced_fields = inputs
        .named_fields()
        .into_iter()
        .filter(|(_, value)| !(value.is_finite() && *value >= 0.0))
        .map(|(name, _)| name)
        .collect();

    SanitizedInputs {
        inputs: FinancialInputs {
            average_price: sanitize_value(inputs.average_price),
            cost_per_unit: sanitize_value(inputs.cost_per_unit),
            fixed_costs: sanitize_value(inputs.fixed_costs),
            customer_acquisition_cost: sanitize_value(inputs.customer_acquisition_cost),
            monthly_new_customers: sanitize_value(inputs.monthly_new_customers),
            average_customer_lifetime: sanitize_value(inputs.average_customer_lifetime),
        },
        coerced_fields,
    }
}

/// Derive the eight KPIs from raw inputs
#[must_use]
pub fn calculate_kpis(inputs: &FinancialInputs) -> KpiResults {
    let sanitized = sanitize_inputs(inputs);
    if !sanitized.is_clean() {
        debug!(fields = ?sanitized.coerced_fields, "coerced malformed financial inputs to zero");
    }
    calculate_sanitized(&sanitized.inputs)
}

/// Derive the KPIs from inputs that are already finite and non-negative
pub(crate) fn calculate_sanitized(inputs: &FinancialInputs) -> KpiResults {
    let price = inputs.average_price;
    let cost = inputs.cost_per_unit;
    let fixed_costs = inputs.fixed_costs;
    let cac = inputs.customer_acquisition_cost;
    let customers = inputs.monthly_new_customers;
    let lifetime = inputs.average_customer_lifetime;

    let unit_margin = price - cost;
    let monthly_revenue = price * customers;
    let monthly_variable_costs = cost * customers;
    let monthly_cac_costs = cac * customers;
    let monthly_profit = monthly_revenue - monthly_variable_costs - fixed_costs - monthly_cac_costs;

    // Ratio is taken against the reported LTV
    let ltv = finite_or_zero(unit_margin * lifetime);

    // Free acquisition wins over the sign of LTV
    let cac_ltv_ratio = if cac == 0.0 {
        0.0
    } else if ltv <= 0.0 {
        f64::INFINITY
    } else {
        cac / ltv
    };

    let raw_break_even_units = if unit_margin > 0.0 {
        fixed_costs / unit_margin
    } else {
        f64::INFINITY
    };
    let raw_break_even_months = if customers > 0.0 {
        raw_break_even_units / customers
    } else {
        f64::INFINITY
    };

    KpiResults {
        unit_margin: finite_or_zero(unit_margin),
        monthly_revenue: finite_or_zero(monthly_revenue),
        monthly_profit: finite_or_zero(monthly_profit),
        ltv,
        cac,
        cac_ltv_ratio,
        break_even_units: finite_or_zero(raw_break_even_units),
        break_even_months: finite_or_zero(raw_break_even_months),
        break_even_reachable: raw_break_even_units.is_finite()
            && raw_break_even_months.is_finite(),
    }
}
