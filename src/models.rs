// ABOUTME: Data models re-exported from lean-canvas-core
// ABOUTME: Financial inputs, KPI results, health tiers and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! # Data Models
//!
//! - `FinancialInputs`: the six numbers entered next to the canvas
//! - `KpiResults`: derived unit economics
//! - `HealthClassification`: three tiers summarizing the KPIs
//! - `Recommendation`: one advisory message
//! - `CalculationResult`: everything above plus timestamp and version

pub use lean_canvas_core::models::*;
