// ABOUTME: Core data models for the Lean Canvas financial engine
// ABOUTME: Re-exports financial inputs, KPI results, health and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Data models exchanged between the engine and its callers

/// Financial inputs and derived KPI results
pub mod financial;
/// Health tiers and their classification
pub mod health;
/// Advisory recommendations
pub mod recommendation;

pub use financial::{CalculationResult, FinancialInputs, KpiResults};
pub use health::{HealthClassification, HealthTier};
pub use recommendation::{Recommendation, RecommendationStatus, RecommendationType};
