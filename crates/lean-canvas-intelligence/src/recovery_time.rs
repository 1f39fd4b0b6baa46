// ABOUTME: Human-readable rendering of CAC recovery time expressed in months
// ABOUTME: Switches to days or weeks below one month and rounds near-whole months
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use lean_canvas_core::constants::recovery_time::{
    DAYS_PER_MONTH, DAYS_PER_WEEK, MAX_DAYS_DISPLAYED_AS_DAYS, UNBOUNDED, WHOLE_MONTH_EPSILON,
    WHOLE_MONTH_TOLERANCE,
};

fn plural(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn whole_months(months: f64) -> String {
    plural(months.round() as u64, "mes", "meses")
}

/// Render a months value, e.g. `"1 mes"`, `"2.5 meses"`, `"3 semanas"`, `"∞"`
#[must_use]
pub fn format_recovery_time(months: f64) -> String {
    if !months.is_finite() || months <= 0.0 {
        return UNBOUNDED.to_owned();
    }

    if months < 1.0 {
        // Never render a positive duration as zero days
        let days = (months * DAYS_PER_MONTH).round().max(1.0);
        if days <= MAX_DAYS_DISPLAYED_AS_DAYS {
            return plural(days as u64, "día", "días");
        }
        let weeks = (days / DAYS_PER_WEEK).round();
        return plural(weeks as u64, "semana", "semanas");
    }

    let fraction = months.fract();
    if fraction <= WHOLE_MONTH_TOLERANCE + WHOLE_MONTH_EPSILON
        || fraction >= 1.0 - WHOLE_MONTH_TOLERANCE - WHOLE_MONTH_EPSILON
    {
        return whole_months(months);
    }
    format!("{months:.1} meses")
}
