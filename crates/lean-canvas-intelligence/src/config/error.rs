// ABOUTME: Configuration error types for financial engine validation
// ABOUTME: Defines error variants for invalid ranges, shares, and unparsable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Configuration error types for financial engine validation.

use lean_canvas_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Threshold pair in the wrong order (e.g., medium ratio above good ratio)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an override value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Share or multiplier outside its valid interval
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::config_invalid(error.to_string())
            }
            ConfigError::Parse(_) => Self::config(error.to_string()),
        }
    }
}
