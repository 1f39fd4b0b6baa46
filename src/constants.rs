// ABOUTME: Application constants and environment variable names for the calling layer
// ABOUTME: Service identity, env var keys, and defaults used by config and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! # Constants Module
//!
//! Engine thresholds live in `lean_canvas_core::constants`; this module only
//! holds what the surrounding application needs.

pub use lean_canvas_core::constants::{engine, health, recommendation, recovery_time, storage};

/// Service names used in structured logs
pub mod service_names {
    /// Default service name
    pub const LEAN_CANVAS: &str = "lean-canvas";
    /// Command line front-end
    pub const LEAN_CANVAS_CLI: &str = "lean-canvas-cli";
}

/// Environment variable names read by `AppConfig` and `LoggingConfig`
pub mod env_keys {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line in logs
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread ids and names in logs
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Emit span open/close events
    pub const LOG_INCLUDE_SPANS: &str = "LOG_INCLUDE_SPANS";
    /// Service name override
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Default result output format (json, yaml, text)
    pub const OUTPUT_FORMAT: &str = "LEAN_CANVAS_OUTPUT";
    /// Stand-in written for non-finite numbers when persisting results
    pub const STORAGE_SENTINEL: &str = "LEAN_CANVAS_STORAGE_SENTINEL";
}

/// Default values
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
    /// Default deployment environment
    pub const ENVIRONMENT: &str = "development";
}
