// ABOUTME: Financial engine configuration for health tiers and recommendation sizing
// ABOUTME: Defaults reproduce the canonical rules; env overrides are validated before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Financial Engine Configuration
//!
//! Thresholds for the health classifier and the multipliers the
//! recommendation generator uses to size its targets. `Default` is the
//! canonical rule set; deployments may override individual values through
//! `LEAN_CANVAS_*` environment variables.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use lean_canvas_core::constants::{health, recommendation};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main financial engine configuration container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialEngineConfig {
    /// Health classifier thresholds
    pub health: HealthThresholds,
    /// Recommendation generator multipliers
    pub recommendations: RecommendationThresholds,
}

/// Thresholds used to assign health tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// LTV/CAC at or above which acquisition is `good`
    pub ltv_cac_good_ratio: f64,
    /// LTV/CAC at or above which acquisition is `medium`
    pub ltv_cac_medium_ratio: f64,
    /// Share of revenue tolerated as monthly loss for `medium` profitability
    pub loss_tolerance_revenue_share: f64,
    /// Absolute cap on the tolerated monthly loss
    pub loss_tolerance_cap: f64,
    /// Rate free acquisition (`cac_ltv_ratio == 0`) as `good` instead of inverting it
    pub treat_free_acquisition_as_optimal: bool,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            ltv_cac_good_ratio: health::LTV_CAC_GOOD_RATIO,
            ltv_cac_medium_ratio: health::LTV_CAC_MEDIUM_RATIO,
            loss_tolerance_revenue_share: health::LOSS_TOLERANCE_REVENUE_SHARE,
            loss_tolerance_cap: health::LOSS_TOLERANCE_CAP,
            treat_free_acquisition_as_optimal: true,
        }
    }
}

/// Multipliers used to size recommendation targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// LTV/CAC ratio recommendations aim for
    pub target_ltv_cac_ratio: f64,
    /// Share of monthly profit suggested for reinvestment
    pub reinvestment_share: f64,
    /// CAC ceiling as a share of LTV when CAC exceeds LTV
    pub cac_ceiling_ltv_share: f64,
    /// CAC ceiling as a share of unit margin when CAC exceeds the margin
    pub cac_ceiling_margin_share_critical: f64,
    /// CAC ceiling as a share of unit margin for near-break-even businesses
    pub cac_ceiling_margin_share: f64,
    /// LTV divisor for the CAC target of weak acquisition economics
    pub cac_target_ltv_divisor: f64,
    /// Minimum break-even horizon (months) before suggesting optimization
    pub break_even_horizon_min_months: f64,
    /// Break-even horizon expressed in customer lifetimes
    pub break_even_horizon_lifetimes: f64,
    /// Suggested fixed cost reduction share
    pub fixed_cost_reduction_share: f64,
    /// Customer lifetime (months) below which retention work is suggested
    pub retention_lifetime_threshold_months: f64,
    /// Suggested relative lifetime improvement
    pub retention_lifetime_improvement: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            target_ltv_cac_ratio: recommendation::TARGET_LTV_CAC_RATIO,
            reinvestment_share: recommendation::REINVESTMENT_SHARE,
            cac_ceiling_ltv_share: recommendation::CAC_CEILING_LTV_SHARE,
            cac_ceiling_margin_share_critical: recommendation::CAC_CEILING_MARGIN_SHARE_CRITICAL,
            cac_ceiling_margin_share: recommendation::CAC_CEILING_MARGIN_SHARE,
            cac_target_ltv_divisor: recommendation::CAC_TARGET_LTV_DIVISOR,
            break_even_horizon_min_months: recommendation::BREAK_EVEN_HORIZON_MIN_MONTHS,
            break_even_horizon_lifetimes: recommendation::BREAK_EVEN_HORIZON_LIFETIMES,
            fixed_cost_reduction_share: recommendation::FIXED_COST_REDUCTION_SHARE,
            retention_lifetime_threshold_months:
                recommendation::RETENTION_LIFETIME_THRESHOLD_MONTHS,
            retention_lifetime_improvement: recommendation::RETENTION_LIFETIME_IMPROVEMENT,
        }
    }
}

impl FinancialEngineConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invariant that does not hold
    pub fn validate(&self) -> Result<(), ConfigError> {
        let health = &self.health;
        if health.ltv_cac_medium_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "ltv_cac_medium_ratio must be positive",
            ));
        }
        if health.ltv_cac_medium_ratio >= health.ltv_cac_good_ratio {
            return Err(ConfigError::InvalidRange(
                "ltv_cac_medium_ratio must be < ltv_cac_good_ratio",
            ));
        }
        if !(0.0..=1.0).contains(&health.loss_tolerance_revenue_share) {
            return Err(ConfigError::ValueOutOfRange(
                "loss_tolerance_revenue_share must be between 0 and 1",
            ));
        }
        if health.loss_tolerance_cap < 0.0 || !health.loss_tolerance_cap.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "loss_tolerance_cap must be a finite non-negative amount",
            ));
        }

        let recs = &self.recommendations;
        let shares = [
            (recs.reinvestment_share, "reinvestment_share must be in (0, 1]"),
            (
                recs.cac_ceiling_ltv_share,
                "cac_ceiling_ltv_share must be in (0, 1]",
            ),
            (
                recs.cac_ceiling_margin_share_critical,
                "cac_ceiling_margin_share_critical must be in (0, 1]",
            ),
            (
                recs.cac_ceiling_margin_share,
                "cac_ceiling_margin_share must be in (0, 1]",
            ),
            (
                recs.fixed_cost_reduction_share,
                "fixed_cost_reduction_share must be in (0, 1]",
            ),
        ];
        for (share, message) in shares {
            if share <= 0.0 || share > 1.0 {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }

        let positives = [
            (recs.target_ltv_cac_ratio, "target_ltv_cac_ratio must be positive"),
            (
                recs.cac_target_ltv_divisor,
                "cac_target_ltv_divisor must be positive",
            ),
            (
                recs.break_even_horizon_min_months,
                "break_even_horizon_min_months must be positive",
            ),
            (
                recs.break_even_horizon_lifetimes,
                "break_even_horizon_lifetimes must be positive",
            ),
            (
                recs.retention_lifetime_threshold_months,
                "retention_lifetime_threshold_months must be positive",
            ),
            (
                recs.retention_lifetime_improvement,
                "retention_lifetime_improvement must be positive",
            ),
        ];
        for (value, message) in positives {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "LEAN_CANVAS_LTV_CAC_GOOD_RATIO",
            &mut self.health.ltv_cac_good_ratio,
        )?;
        Self::apply_env_var(
            "LEAN_CANVAS_LTV_CAC_MEDIUM_RATIO",
            &mut self.health.ltv_cac_medium_ratio,
        )?;
        Self::apply_env_var(
            "LEAN_CANVAS_LOSS_TOLERANCE_SHARE",
            &mut self.health.loss_tolerance_revenue_share,
        )?;
        Self::apply_env_var(
            "LEAN_CANVAS_LOSS_TOLERANCE_CAP",
            &mut self.health.loss_tolerance_cap,
        )?;
        Self::apply_env_var(
            "LEAN_CANVAS_FREE_CAC_IS_OPTIMAL",
            &mut self.health.treat_free_acquisition_as_optimal,
        )?;

        Self::apply_env_var(
            "LEAN_CANVAS_TARGET_LTV_CAC_RATIO",
            &mut self.recommendations.target_ltv_cac_ratio,
        )?;
        Self::apply_env_var(
            "LEAN_CANVAS_REINVESTMENT_SHARE",
            &mut self.recommendations.reinvestment_share,
        )?;
        Self::apply_env_var(
            "LEAN_CANVAS_BREAK_EVEN_HORIZON_MONTHS",
            &mut self.recommendations.break_even_horizon_min_months,
        )?;
        Self::apply_env_var(
            "LEAN_CANVAS_FIXED_COST_REDUCTION",
            &mut self.recommendations.fixed_cost_reduction_share,
        )?;
        Self::apply_env_var(
            "LEAN_CANVAS_RETENTION_THRESHOLD_MONTHS",
            &mut self.recommendations.retention_lifetime_threshold_months,
        )?;

        Ok(self)
    }
}
