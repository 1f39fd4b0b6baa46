// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Thresholds, multipliers, and labels used by the financial KPI engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Constants module
//!
//! Every numeric rule the health classifier and recommendation generator
//! apply lives here so that the engine configuration defaults and the
//! tests share a single source.

/// Engine identity
pub mod engine {
    /// Version tag stamped on every `CalculationResult`
    pub const CALCULATION_VERSION: &str = "2.1.0";
}

/// Health tier thresholds
pub mod health {
    /// LTV/CAC ratio at or above which acquisition is healthy
    pub const LTV_CAC_GOOD_RATIO: f64 = 3.0;
    /// LTV/CAC ratio at or above which acquisition is acceptable
    pub const LTV_CAC_MEDIUM_RATIO: f64 = 2.0;
    /// Share of monthly revenue tolerated as a monthly loss for a `medium` tier
    pub const LOSS_TOLERANCE_REVENUE_SHARE: f64 = 0.10;
    /// Absolute cap on the tolerated monthly loss
    pub const LOSS_TOLERANCE_CAP: f64 = 500.0;
}

/// Recommendation multipliers and limits
pub mod recommendation {
    /// Target LTV/CAC ratio used when sizing improvements
    pub const TARGET_LTV_CAC_RATIO: f64 = 3.0;
    /// Share of monthly profit suggested for reinvestment
    pub const REINVESTMENT_SHARE: f64 = 0.70;
    /// CAC ceiling as a share of LTV when CAC already exceeds LTV
    pub const CAC_CEILING_LTV_SHARE: f64 = 0.80;
    /// CAC ceiling as a share of unit margin when CAC exceeds the margin
    pub const CAC_CEILING_MARGIN_SHARE_CRITICAL: f64 = 0.80;
    /// CAC ceiling as a share of unit margin for near-break-even businesses
    pub const CAC_CEILING_MARGIN_SHARE: f64 = 0.90;
    /// CAC target divisor for weak but non-negative acquisition economics
    pub const CAC_TARGET_LTV_DIVISOR: f64 = 2.0;
    /// Minimum break-even horizon in months before an optimization is suggested
    pub const BREAK_EVEN_HORIZON_MIN_MONTHS: f64 = 24.0;
    /// Break-even horizon expressed in customer lifetimes
    pub const BREAK_EVEN_HORIZON_LIFETIMES: f64 = 2.0;
    /// Suggested fixed cost reduction when break-even is too far away
    pub const FIXED_COST_REDUCTION_SHARE: f64 = 0.30;
    /// Customer lifetime (months) below which retention work is suggested
    pub const RETENTION_LIFETIME_THRESHOLD_MONTHS: f64 = 12.0;
    /// Suggested relative lifetime improvement
    pub const RETENTION_LIFETIME_IMPROVEMENT: f64 = 0.50;
}

/// Recovery time formatting
pub mod recovery_time {
    /// Days per month used when converting fractional months
    pub const DAYS_PER_MONTH: f64 = 30.0;
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Up to this many days the value is shown in days
    pub const MAX_DAYS_DISPLAYED_AS_DAYS: f64 = 7.0;
    /// Fractional month part considered close enough to a whole month
    pub const WHOLE_MONTH_TOLERANCE: f64 = 0.1;
    /// Slack for binary rounding of the fractional part
    pub const WHOLE_MONTH_EPSILON: f64 = 1e-9;
    /// Rendered when the recovery time is unbounded
    pub const UNBOUNDED: &str = "∞";
}

/// Storage conventions used by the calling layer
pub mod storage {
    /// Stand-in for non-finite numbers in storage engines that cannot hold them
    pub const NON_FINITE_SENTINEL: f64 = -1.0;
}
