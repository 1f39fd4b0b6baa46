// ABOUTME: Core types and constants for the Lean Canvas financial engine
// ABOUTME: Foundation crate with error handling, the financial data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

#![deny(unsafe_code)]

//! # Lean Canvas Core
//!
//! Foundation crate providing shared types and constants for the Lean Canvas
//! financial engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Thresholds and multipliers used by the KPI engine
//! - **models**: Financial inputs, KPI results, health tiers, and recommendations

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (inputs, KPIs, health, recommendations)
pub mod models;
