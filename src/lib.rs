// ABOUTME: Main library entry point for the Lean Canvas financial KPI toolkit
// ABOUTME: Calling layer around the engine: config, logging, services, storage and output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

#![deny(unsafe_code)]

//! # Lean Canvas
//!
//! Unit economics for the financial block of a Lean Canvas. Six numbers go
//! in; KPIs, health tiers and Spanish-language recommendations come out.
//!
//! ## Architecture
//!
//! - **`lean_canvas_core`**: data model, error type, domain constants
//! - **`lean_canvas_intelligence`**: the pure calculation engine
//! - **this crate**: configuration, logging, the analysis service, storage
//!   mapping, presentation helpers, output formats and the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lean_canvas::config::AppConfig;
//! use lean_canvas::errors::AppResult;
//! use lean_canvas::models::FinancialInputs;
//! use lean_canvas::services::FinancialAnalysisService;
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let service = FinancialAnalysisService::from_config(&config);
//!
//!     let inputs = FinancialInputs::new(100.0, 50.0, 1000.0, 25.0, 50.0, 12.0);
//!     let result = service.analyze(&inputs);
//!     println!("overall health: {}", result.health.overall_health);
//!
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Output format abstraction (JSON, YAML, text)
pub mod formatters;

/// Financial engine re-exports
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Data models re-exported from the core crate
pub mod models;

/// Display helpers for ratios, currency and markup
pub mod presentation;

/// Analysis service and input decoding
pub mod services;

/// Flat persistence records with sentinel mapping
pub mod storage;
