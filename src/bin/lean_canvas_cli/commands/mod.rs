// ABOUTME: Command implementations for lean-canvas-cli
// ABOUTME: Shared output settings plus calculate, scenarios and config subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

pub mod calculate;
pub mod config;
pub mod scenarios;

use lean_canvas::errors::{AppError, AppResult};
use lean_canvas::formatters::{format_output, format_output_pretty, OutputFormat, TextReport};
use lean_canvas::models::FinancialInputs;
use serde::Serialize;
use std::io::{self, Write};

use crate::InputFlags;

/// How results are written to stdout
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Serialization format
    pub format: OutputFormat,
    /// Multi-line JSON
    pub pretty: bool,
}

impl Output {
    /// Serialize `data` and write it to stdout
    pub fn emit<T: Serialize + TextReport>(self, data: &T) -> AppResult<()> {
        let formatted = if self.pretty {
            format_output_pretty(data, self.format)?
        } else {
            format_output(data, self.format)?
        };

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", formatted.data.trim_end())
            .map_err(|e| AppError::internal(format!("failed to write output: {e}")))?;
        Ok(())
    }
}

impl InputFlags {
    /// All six flags are required when no input file is given
    pub fn into_inputs(self) -> AppResult<FinancialInputs> {
        let require = |value: Option<f64>, flag: &str| {
            value.ok_or_else(|| AppError::missing_field(flag))
        };

        Ok(FinancialInputs::new(
            require(self.average_price, "--average-price")?,
            require(self.cost_per_unit, "--cost-per-unit")?,
            require(self.fixed_costs, "--fixed-costs")?,
            require(self.customer_acquisition_cost, "--cac")?,
            require(self.monthly_new_customers, "--monthly-new-customers")?,
            require(self.average_customer_lifetime, "--customer-lifetime")?,
        ))
    }
}
