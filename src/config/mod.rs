// ABOUTME: Configuration management module for the Lean Canvas calling layer
// ABOUTME: Re-exports environment configuration and the engine's threshold configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Configuration module
//!
//! - **Environment**: application settings loaded from environment variables
//! - **Engine**: health thresholds and recommendation multipliers, re-exported
//!   from `lean_canvas_intelligence`

/// Environment-based application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
pub use lean_canvas_intelligence::config::{
    ConfigError, FinancialEngineConfig, HealthThresholds, RecommendationThresholds,
};
