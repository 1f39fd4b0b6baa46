// ABOUTME: Advisory recommendation model returned alongside the KPIs
// ABOUTME: Type and status are closed enums serialized as snake_case strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use serde::{Deserialize, Serialize};

/// Which part of the business a recommendation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Is the business profitable at all
    Viability,
    /// Is customer acquisition paying off
    Acquisition,
    /// Growth or cost optimization
    Optimization,
    /// Prioritized action items
    NextSteps,
}

impl RecommendationType {
    /// Wire name of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Viability => "viability",
            Self::Acquisition => "acquisition",
            Self::Optimization => "optimization",
            Self::NextSteps => "next_steps",
        }
    }
}

/// Tone of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    /// Things are going well
    Positive,
    /// Needs attention
    Warning,
    /// Losing money
    Negative,
    /// Informational
    Neutral,
}

impl RecommendationStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// One advisory entry; `message` may contain `<strong>` emphasis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Category
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
    /// Tone
    pub status: RecommendationStatus,
}

impl Recommendation {
    /// Create a recommendation
    #[must_use]
    pub fn new(
        recommendation_type: RecommendationType,
        title: impl Into<String>,
        message: impl Into<String>,
        status: RecommendationStatus,
    ) -> Self {
        Self {
            recommendation_type,
            title: title.into(),
            message: message.into(),
            status,
        }
    }
}
