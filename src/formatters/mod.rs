// ABOUTME: Output format abstraction for serializing calculation results
// ABOUTME: Supports JSON (default), YAML and a human-readable text report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, consumed by storage and web callers
//! - **YAML**: Same structure, easier to read and diff
//! - **Text**: Terminal report built from the presentation helpers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lean_canvas::formatters::{format_output, OutputFormat};
//! use lean_canvas_core::models::FinancialInputs;
//! use lean_canvas_intelligence::calculate_financial_metrics;
//!
//! let result = calculate_financial_metrics(&FinancialInputs::default());
//! if let Ok(output) = format_output(&result, OutputFormat::Yaml) {
//!     println!("{}", output.data);
//! }
//! ```

use crate::config::AppConfig;
use crate::presentation::{format_currency, health_label, ltv_cac_display, render_plain};
use lean_canvas_core::models::CalculationResult;
use lean_canvas_intelligence::format_recovery_time;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// YAML format
    Yaml,
    /// Plain text report for terminals
    Text,
}

impl OutputFormat {
    /// Parse a format name, `None` when unrecognized
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }

    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Yaml => "application/yaml",
            Self::Text => "text/plain; charset=utf-8",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Text => "text",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown output format '{s}' (json, yaml, text)"))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone, thiserror::Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for lean_canvas_core::errors::AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Values that can be rendered as a plain text report
pub trait TextReport {
    /// Render for a terminal
    fn to_text(&self) -> String;
}

impl TextReport for CalculationResult {
    fn to_text(&self) -> String {
        let kpis = &self.kpis;
        let mut out = String::new();

        let _ = writeln!(out, "Indicadores");
        let _ = writeln!(out, "  Margen unitario:       {}", format_currency(kpis.unit_margin));
        let _ = writeln!(out, "  Ingresos mensuales:    {}", format_currency(kpis.monthly_revenue));
        let _ = writeln!(out, "  Beneficio mensual:     {}", format_currency(kpis.monthly_profit));
        let _ = writeln!(out, "  LTV:                   {}", format_currency(kpis.ltv));
        let _ = writeln!(out, "  CAC:                   {}", format_currency(kpis.cac));
        let _ = writeln!(out, "  LTV:CAC:               {}", ltv_cac_display(kpis.cac_ltv_ratio));
        if kpis.break_even_reachable {
            let _ = writeln!(out, "  Equilibrio (unidades): {:.0}", kpis.break_even_units.ceil());
            let _ = writeln!(
                out,
                "  Equilibrio (tiempo):   {}",
                break_even_time_display(kpis.break_even_months)
            );
        } else {
            let _ = writeln!(out, "  Equilibrio:            inalcanzable");
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Salud");
        let _ = writeln!(
            out,
            "  Rentabilidad: {}",
            health_label(self.health.profitability_health)
        );
        let _ = writeln!(out, "  LTV:CAC:      {}", health_label(self.health.ltv_cac_health));
        let _ = writeln!(out, "  General:      {}", health_label(self.health.overall_health));

        for recommendation in &self.recommendations {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "[{}] {}",
                recommendation.status.as_str(),
                recommendation.title
            );
            for line in render_plain(&recommendation.message).lines() {
                let _ = writeln!(out, "  {line}");
            }
        }

        out
    }
}

/// Reachable break-even with no fixed costs happens immediately
fn break_even_time_display(months: f64) -> String {
    if months <= 0.0 {
        "inmediato".to_owned()
    } else {
        format_recovery_time(months)
    }
}

impl TextReport for Vec<CalculationResult> {
    fn to_text(&self) -> String {
        self.iter()
            .enumerate()
            .map(|(index, result)| format!("== Escenario {} ==\n{}", index + 1, result.to_text()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextReport for AppConfig {
    fn to_text(&self) -> String {
        let health = &self.engine.health;
        let recs = &self.engine.recommendations;
        let mut out = String::new();

        let _ = writeln!(out, "service:            {} {}", self.service_name, self.service_version);
        let _ = writeln!(out, "environment:        {}", self.environment);
        let _ = writeln!(out, "output format:      {}", self.output_format);
        let _ = writeln!(out, "storage sentinel:   {}", self.storage_sentinel);
        let _ = writeln!(out, "ltv:cac good:       {}", health.ltv_cac_good_ratio);
        let _ = writeln!(out, "ltv:cac medium:     {}", health.ltv_cac_medium_ratio);
        let _ = writeln!(out, "loss tolerance:     {}", health.loss_tolerance_revenue_share);
        let _ = writeln!(out, "loss tolerance cap: {}", health.loss_tolerance_cap);
        let _ = writeln!(out, "free cac optimal:   {}", health.treat_free_acquisition_as_optimal);
        let _ = writeln!(out, "target ltv:cac:     {}", recs.target_ltv_cac_ratio);
        let _ = writeln!(out, "reinvestment share: {}", recs.reinvestment_share);
        let _ = writeln!(out, "break-even horizon: {}", recs.break_even_horizon_min_months);
        let _ = writeln!(out, "fixed cost cut:     {}", recs.fixed_cost_reduction_share);
        let _ = writeln!(out, "retention months:   {}", recs.retention_lifetime_threshold_months);

        out
    }
}

fn serialize<T: Serialize + TextReport>(
    data: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, FormatError> {
    let to_error = |message: String| FormatError { message, format };
    match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(data).map_err(|e| to_error(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string(data).map_err(|e| to_error(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(data).map_err(|e| to_error(e.to_string())),
        OutputFormat::Text => Ok(data.to_text()),
    }
}

/// Format data to the specified output format
///
/// # Errors
///
/// Returns `FormatError` if JSON or YAML serialization fails
pub fn format_output<T: Serialize + TextReport>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    Ok(FormattedOutput {
        data: serialize(data, format, false)?,
        format,
        content_type: format.content_type(),
    })
}

/// Format data to pretty-printed output (for display)
///
/// # Errors
///
/// Returns `FormatError` if JSON or YAML serialization fails
pub fn format_output_pretty<T: Serialize + TextReport>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    Ok(FormattedOutput {
        data: serialize(data, format, true)?,
        format,
        content_type: format.content_type(),
    })
}
