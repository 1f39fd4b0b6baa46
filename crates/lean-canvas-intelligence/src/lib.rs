// ABOUTME: Financial KPI engine for Lean Canvas unit economics
// ABOUTME: Calculator, health classifier, recommendation generator and their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

#![deny(unsafe_code)]

//! # Lean Canvas Intelligence
//!
//! Turns six financial inputs into unit economics, a three-tier health
//! classification and a list of advisory recommendations.
//!
//! The engine is pure and total: it performs no I/O, holds no shared
//! mutable state and never fails. Malformed numbers degrade to zero-valued
//! metrics instead of errors.
//!
//! ```rust
//! use lean_canvas_core::models::{FinancialInputs, HealthTier};
//! use lean_canvas_intelligence::calculate_financial_metrics;
//!
//! let inputs = FinancialInputs::new(100.0, 50.0, 1000.0, 25.0, 50.0, 12.0);
//! let result = calculate_financial_metrics(&inputs);
//! assert_eq!(result.health.overall_health, HealthTier::Good);
//! ```

/// Injectable time source
pub mod clock;
/// Engine thresholds and multipliers
pub mod config;
/// Pipeline entry points
pub mod engine;
/// Health tier classification
pub mod health_classifier;
/// Unit economics calculation
pub mod kpi_calculator;
/// Advisory message generation
pub mod recommendation;
/// CAC payback time rendering
pub mod recovery_time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, FinancialEngineConfig, HealthThresholds, RecommendationThresholds};
pub use engine::{
    calculate_financial_metrics, calculate_kpis, classify_health, generate_recommendations,
    FinancialEngine,
};
pub use kpi_calculator::{sanitize_inputs, SanitizedInputs};
pub use recovery_time::format_recovery_time;
