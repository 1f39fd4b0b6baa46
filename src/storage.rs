// ABOUTME: Flat persistence record for calculation results
// ABOUTME: Maps non-finite ratios to a finite sentinel and back, appends records as JSON lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Storage mapping
//!
//! Databases and JSON cannot hold `Infinity`. Every numeric column is
//! written finite: non-finite values become the configured sentinel
//! (`-1` by default), and `restore` turns a sentinel ratio back into
//! `Infinity`. The engine keeps every other metric finite, so only the
//! ratio is restored.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use lean_canvas_core::models::{
    CalculationResult, HealthClassification, HealthTier, KpiResults, Recommendation,
};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// One persisted calculation, one column per value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCalculation {
    /// Price minus unit cost
    pub unit_margin: f64,
    /// Monthly revenue
    pub monthly_revenue: f64,
    /// Monthly profit
    pub monthly_profit: f64,
    /// Lifetime value
    pub ltv: f64,
    /// Acquisition cost
    pub cac: f64,
    /// CAC/LTV, sentinel when unbounded
    pub cac_ltv_ratio: f64,
    /// Units to cover fixed costs
    pub break_even_units: f64,
    /// Months to cover fixed costs
    pub break_even_months: f64,
    /// Whether break-even can be reached at all
    pub break_even_reachable: bool,
    /// Profitability tier
    pub profitability_health: String,
    /// LTV:CAC tier
    pub ltv_cac_health: String,
    /// Overall tier
    pub overall_health: String,
    /// Recommendations serialized as a JSON array
    pub recommendations: String,
    /// Calculation timestamp
    pub calculated_at: DateTime<Utc>,
    /// Engine version that produced the record
    pub calculation_version: String,
}

fn finite_or(value: f64, sentinel: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        sentinel
    }
}

fn parse_tier(column: &str, value: &str) -> AppResult<HealthTier> {
    value
        .parse()
        .map_err(|e: String| AppError::storage(format!("column {column}: {e}")))
}

impl StoredCalculation {
    /// Flatten a result, replacing non-finite numbers with `sentinel`
    ///
    /// # Errors
    ///
    /// Returns an error if the recommendations cannot be serialized
    pub fn from_result(result: &CalculationResult, sentinel: f64) -> AppResult<Self> {
        let kpis = &result.kpis;
        Ok(Self {
            unit_margin: finite_or(kpis.unit_margin, sentinel),
            monthly_revenue: finite_or(kpis.monthly_revenue, sentinel),
            monthly_profit: finite_or(kpis.monthly_profit, sentinel),
            ltv: finite_or(kpis.ltv, sentinel),
            cac: finite_or(kpis.cac, sentinel),
            cac_ltv_ratio: finite_or(kpis.cac_ltv_ratio, sentinel),
            break_even_units: finite_or(kpis.break_even_units, sentinel),
            break_even_months: finite_or(kpis.break_even_months, sentinel),
            break_even_reachable: kpis.break_even_reachable,
            profitability_health: result.health.profitability_health.to_string(),
            ltv_cac_health: result.health.ltv_cac_health.to_string(),
            overall_health: result.health.overall_health.to_string(),
            recommendations: serde_json::to_string(&result.recommendations)?,
            calculated_at: result.calculated_at,
            calculation_version: result.calculation_version.clone(),
        })
    }

    /// Rebuild the result, mapping a sentinel ratio back to `Infinity`
    ///
    /// # Errors
    ///
    /// Returns an error if a tier column or the recommendations column is malformed
    pub fn restore(&self, sentinel: f64) -> AppResult<CalculationResult> {
        #[allow(clippy::float_cmp)]
        let cac_ltv_ratio = if self.cac_ltv_ratio == sentinel {
            f64::INFINITY
        } else {
            self.cac_ltv_ratio
        };

        let recommendations: Vec<Recommendation> = serde_json::from_str(&self.recommendations)
            .map_err(|e| AppError::storage(format!("column recommendations: {e}")).with_source(e))?;

        Ok(CalculationResult {
            kpis: KpiResults {
                unit_margin: self.unit_margin,
                monthly_revenue: self.monthly_revenue,
                monthly_profit: self.monthly_profit,
                ltv: self.ltv,
                cac: self.cac,
                cac_ltv_ratio,
                break_even_units: self.break_even_units,
                break_even_months: self.break_even_months,
                break_even_reachable: self.break_even_reachable,
            },
            health: HealthClassification {
                profitability_health: parse_tier(
                    "profitabilityHealth",
                    &self.profitability_health,
                )?,
                ltv_cac_health: parse_tier("ltvCacHealth", &self.ltv_cac_health)?,
                overall_health: parse_tier("overallHealth", &self.overall_health)?,
            },
            recommendations,
            calculated_at: self.calculated_at,
            calculation_version: self.calculation_version.clone(),
        })
    }
}

/// Append records to a JSON lines file, creating it if needed
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written
pub fn append_jsonl(path: &Path, records: &[StoredCalculation]) -> AppResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), records = records.len(), "stored calculations");
    Ok(())
}

/// Read every record from a JSON lines file
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a valid record
pub fn read_jsonl(path: &Path) -> AppResult<Vec<StoredCalculation>> {
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| {
                AppError::storage(format!("line {}: {e}", index + 1)).with_source(e)
            })
        })
        .collect()
}
