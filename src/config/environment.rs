// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and output/storage defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

//! Environment-based configuration

use crate::constants::{defaults, env_keys, service_names, storage};
use crate::errors::{AppError, AppResult};
use crate::formatters::OutputFormat;
use lean_canvas_intelligence::FinancialEngineConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{debug, info};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Default output format for results
    pub output_format: OutputFormat,
    /// Value written in place of non-finite numbers when persisting
    pub storage_sentinel: f64,
    /// Engine thresholds and multipliers
    pub engine: FinancialEngineConfig,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version (from Cargo.toml)
    pub service_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            output_format: OutputFormat::default(),
            storage_sentinel: storage::NON_FINITE_SENTINEL,
            engine: FinancialEngineConfig::default(),
            service_name: service_names::LEAN_CANVAS.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an output format, sentinel or engine override is invalid
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let output_format = match env::var(env_keys::OUTPUT_FORMAT) {
            Ok(value) => OutputFormat::parse(&value).ok_or_else(|| {
                AppError::config(format!(
                    "Invalid {}: {value} (expected json, yaml or text)",
                    env_keys::OUTPUT_FORMAT
                ))
            })?,
            Err(_) => OutputFormat::default(),
        };

        let storage_sentinel = env_var_or(
            env_keys::STORAGE_SENTINEL,
            &storage::NON_FINITE_SENTINEL.to_string(),
        )
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value < 0.0)
        .ok_or_else(|| {
            AppError::config(format!(
                "Invalid {}: must be a negative finite number",
                env_keys::STORAGE_SENTINEL
            ))
        })?;

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                defaults::ENVIRONMENT,
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(
                env_keys::RUST_LOG,
                defaults::LOG_LEVEL,
            )),
            output_format,
            storage_sentinel,
            engine: FinancialEngineConfig::load()?,
            service_name: env_var_or(env_keys::SERVICE_NAME, service_names::LEAN_CANVAS),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        };

        info!(
            environment = %config.environment,
            output_format = %config.output_format,
            storage_sentinel = config.storage_sentinel,
            "Configuration loaded from environment"
        );

        Ok(config)
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
