// ABOUTME: Unified error handling re-exported from lean-canvas-core
// ABOUTME: Keeps crate::errors import paths stable for the calling layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! # Unified Error Handling System
//!
//! The engine never fails; these errors cover configuration, input files,
//! serialization and storage in the calling layer.

pub use lean_canvas_core::errors::{AppError, AppResult, ErrorCode};
