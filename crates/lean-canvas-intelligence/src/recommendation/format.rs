// ABOUTME: Number rendering shared by the recommendation message builders
// ABOUTME: Amounts drop trailing zeros; counts are rendered as whole numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

/// Monetary or fractional figure with at most two decimals, no currency symbol
pub fn amount(value: f64) -> String {
    if !value.is_finite() {
        return "∞".to_owned();
    }
    let rendered = format!("{value:.2}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

/// Value that has already been floored or ceiled
pub fn whole(value: f64) -> String {
    if value == 0.0 {
        // Avoid rendering "-0"
        return "0".to_owned();
    }
    format!("{value:.0}")
}

/// One decimal, used for percentages and month counts
pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Share in `[0, 1]` rendered as a whole percentage
pub fn share(value: f64) -> String {
    format!("{:.0}", value * 100.0)
}
