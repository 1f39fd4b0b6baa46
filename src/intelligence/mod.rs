// ABOUTME: Intelligence module re-exports from the lean-canvas-intelligence crate
// ABOUTME: Lets callers reach the engine through crate::intelligence paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! # Intelligence Module
//!
//! The KPI calculator, health classifier and recommendation generator live
//! in `lean_canvas_intelligence`; this module re-exports them.

pub use lean_canvas_intelligence::*;
