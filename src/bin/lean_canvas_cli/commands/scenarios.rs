// ABOUTME: scenarios subcommand - evaluates a file of what-if inputs in parallel
// ABOUTME: Prints results in input order and optionally appends them to a JSON lines store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use super::Output;
use lean_canvas::config::AppConfig;
use lean_canvas::errors::{AppError, AppResult};
use lean_canvas::services::{load_scenarios, FinancialAnalysisService};
use lean_canvas::storage::append_jsonl;
use std::path::Path;
use tracing::info;

pub fn run(
    config: &AppConfig,
    input: &Path,
    store: Option<&Path>,
    output: Output,
) -> AppResult<()> {
    let scenarios = load_scenarios(input)?;
    if scenarios.is_empty() {
        return Err(AppError::invalid_input(format!(
            "{}: no scenarios found",
            input.display()
        )));
    }

    let service = FinancialAnalysisService::from_config(config);
    let results = service.analyze_scenarios(&scenarios);

    if let Some(path) = store {
        let records = results
            .iter()
            .map(|result| service.to_stored(result))
            .collect::<AppResult<Vec<_>>>()?;
        append_jsonl(path, &records)?;
        info!(path = %path.display(), records = records.len(), "Scenarios stored");
    }

    output.emit(&results)
}
