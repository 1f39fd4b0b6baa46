// ABOUTME: Health tier types summarizing profitability and acquisition efficiency
// ABOUTME: Closed enum so every consumer handles good, medium and bad exhaustively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse categorical rating of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    /// Healthy
    Good,
    /// Acceptable, needs attention
    Medium,
    /// Unhealthy
    Bad,
}

impl HealthTier {
    /// Wire name of the tier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Medium => "medium",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "medium" => Ok(Self::Medium),
            "bad" => Ok(Self::Bad),
            other => Err(format!("unknown health tier: {other}")),
        }
    }
}

/// Health tiers derived from a `KpiResults`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthClassification {
    /// Monthly profit and unit margin
    pub profitability_health: HealthTier,
    /// LTV relative to CAC
    pub ltv_cac_health: HealthTier,
    /// Combined verdict
    pub overall_health: HealthTier,
}
