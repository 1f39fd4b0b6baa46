// ABOUTME: Service layer wrapping the financial engine for callers
// ABOUTME: Input decoding from JSON/YAML documents and traced analysis runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Service layer
//!
//! Protocol-agnostic logic shared by the CLI and any embedding caller.

/// Traced calculations over the engine
pub mod financial_analysis;

/// Lenient decoding of caller-supplied input documents
pub mod inputs;

pub use financial_analysis::FinancialAnalysisService;
pub use inputs::{inputs_from_value, load_inputs, load_scenarios, DocumentFormat};
