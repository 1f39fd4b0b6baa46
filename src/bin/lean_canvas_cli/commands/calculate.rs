// ABOUTME: calculate subcommand - runs the engine on one set of inputs
// ABOUTME: Prints the result and optionally appends it to a JSON lines store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use super::Output;
use lean_canvas::config::AppConfig;
use lean_canvas::errors::AppResult;
use lean_canvas::models::FinancialInputs;
use lean_canvas::services::FinancialAnalysisService;
use lean_canvas::storage::append_jsonl;
use std::path::Path;
use tracing::info;

pub fn run(
    config: &AppConfig,
    inputs: &FinancialInputs,
    store: Option<&Path>,
    output: Output,
) -> AppResult<()> {
    let service = FinancialAnalysisService::from_config(config);
    let result = service.analyze(inputs);

    if let Some(path) = store {
        let record = service.to_stored(&result)?;
        append_jsonl(path, &[record])?;
        info!(path = %path.display(), "Calculation stored");
    }

    output.emit(&result)
}
