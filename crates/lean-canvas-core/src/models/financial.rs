// ABOUTME: Financial input and KPI result models for unit economics calculations
// ABOUTME: Serialized in camelCase so the web layer's JSON payloads map directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use super::health::HealthClassification;
use super::recommendation::Recommendation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The six numbers a founder enters next to their Lean Canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    /// Selling price per unit
    pub average_price: f64,
    /// Variable cost per unit
    pub cost_per_unit: f64,
    /// Monthly fixed costs
    pub fixed_costs: f64,
    /// Cost to acquire one customer (CAC)
    pub customer_acquisition_cost: f64,
    /// New customers per month
    pub monthly_new_customers: f64,
    /// Months a customer remains active
    pub average_customer_lifetime: f64,
}

impl FinancialInputs {
    /// Build inputs in the order the canvas form presents them
    #[must_use]
    pub const fn new(
        average_price: f64,
        cost_per_unit: f64,
        fixed_costs: f64,
        customer_acquisition_cost: f64,
        monthly_new_customers: f64,
        average_customer_lifetime: f64,
    ) -> Self {
        Self {
            average_price,
            cost_per_unit,
            fixed_costs,
            customer_acquisition_cost,
            monthly_new_customers,
            average_customer_lifetime,
        }
    }

    /// Field values paired with their wire names, in declaration order
    #[must_use]
    pub const fn named_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("averagePrice", self.average_price),
            ("costPerUnit", self.cost_per_unit),
            ("fixedCosts", self.fixed_costs),
            ("customerAcquisitionCost", self.customer_acquisition_cost),
            ("monthlyNewCustomers", self.monthly_new_customers),
            ("averageCustomerLifetime", self.average_customer_lifetime),
        ]
    }
}

/// Unit economics derived from `FinancialInputs`
///
/// `cac_ltv_ratio` is CAC divided by LTV, the inverse of the LTV/CAC ratio
/// usually quoted; use [`KpiResults::ltv_cac_ratio`] for display. It is the
/// only field that may be `f64::INFINITY`.
///
/// `break_even_units` and `break_even_months` are `0.0` both when break-even
/// is immediate and when it can never be reached; `break_even_reachable`
/// tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiResults {
    /// Price minus variable cost (may be negative)
    pub unit_margin: f64,
    /// Price times monthly new customers
    pub monthly_revenue: f64,
    /// Revenue minus variable, fixed and acquisition costs
    pub monthly_profit: f64,
    /// Unit margin times customer lifetime
    pub ltv: f64,
    /// Customer acquisition cost, passed through
    pub cac: f64,
    /// CAC / LTV; `INFINITY` when LTV is not positive, `0` when CAC is free
    #[serde(with = "non_finite_ratio")]
    pub cac_ltv_ratio: f64,
    /// Units needed to cover fixed costs
    pub break_even_units: f64,
    /// Months of current sales needed to cover fixed costs
    pub break_even_months: f64,
    /// Whether the break-even figures describe a reachable point
    #[serde(default = "default_reachable")]
    pub break_even_reachable: bool,
}

const fn default_reachable() -> bool {
    true
}

impl KpiResults {
    /// Conventional LTV/CAC ratio (`1 / cac_ltv_ratio`, `0` when undefined)
    #[must_use]
    pub fn ltv_cac_ratio(&self) -> f64 {
        if self.cac_ltv_ratio > 0.0 && self.cac_ltv_ratio.is_finite() {
            1.0 / self.cac_ltv_ratio
        } else {
            0.0
        }
    }

    /// True when every field except `cac_ltv_ratio` is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.unit_margin,
            self.monthly_revenue,
            self.monthly_profit,
            self.ltv,
            self.cac,
            self.break_even_units,
            self.break_even_months,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Everything the engine returns for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Derived unit economics
    pub kpis: KpiResults,
    /// Categorical health tiers
    pub health: HealthClassification,
    /// Ordered advisory messages
    pub recommendations: Vec<Recommendation>,
    /// When the calculation ran
    pub calculated_at: DateTime<Utc>,
    /// Engine version that produced the result
    pub calculation_version: String,
}

/// JSON has no infinity; the ratio travels as `null` and comes back as `INFINITY`
mod non_finite_ratio {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
