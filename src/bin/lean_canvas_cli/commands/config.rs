// ABOUTME: config subcommand - prints the effective configuration
// ABOUTME: Shows engine thresholds after environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use super::Output;
use lean_canvas::config::AppConfig;
use lean_canvas::errors::AppResult;

pub fn run(config: &AppConfig, output: Output) -> AppResult<()> {
    output.emit(config)
}
