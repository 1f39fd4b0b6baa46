// ABOUTME: Display helpers for calculation results shown to founders
// ABOUTME: LTV:CAC rendering, currency formatting, markup stripping and tier labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Presentation helpers
//!
//! The engine stores the ratio as CAC/LTV and marks emphasis with
//! `<strong>` tags. These helpers turn both into what a person reads.

use lean_canvas_core::models::HealthTier;

/// Label shown when acquisition costs nothing
pub const FREE_ACQUISITION_LABEL: &str = "Perfecto (CAC gratuito)";

/// Label shown when the ratio cannot be computed
pub const NOT_AVAILABLE_LABEL: &str = "N/A";

/// Render a stored CAC/LTV ratio as the conventional `LTV:CAC` string
///
/// `0` means free acquisition, a non-finite ratio means lifetime value is
/// zero or negative.
#[must_use]
pub fn ltv_cac_display(cac_ltv_ratio: f64) -> String {
    if cac_ltv_ratio == 0.0 {
        return FREE_ACQUISITION_LABEL.to_owned();
    }
    if !cac_ltv_ratio.is_finite() || cac_ltv_ratio < 0.0 {
        return NOT_AVAILABLE_LABEL.to_owned();
    }
    format!("{:.1}:1", 1.0 / cac_ltv_ratio)
}

/// Format an amount as `$1,234.56`; negative amounts get a leading `-`
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE_LABEL.to_owned();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (integer, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let negative = amount < 0.0 && fixed.chars().any(|c| c != '0' && c != '.');
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{decimals}")
}

/// Strip emphasis markup from a recommendation message
#[must_use]
pub fn render_plain(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Spanish display label for a health tier
#[must_use]
pub const fn health_label(tier: HealthTier) -> &'static str {
    match tier {
        HealthTier::Good => "Saludable",
        HealthTier::Medium => "Atención",
        HealthTier::Bad => "Crítico",
    }
}
