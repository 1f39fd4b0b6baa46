// ABOUTME: Lean Canvas CLI - command-line front-end for the financial KPI engine
// ABOUTME: Calculates metrics from flags or files, evaluates scenario batches, shows config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors
//!
//! Usage:
//! ```bash
//! # Calculate from flags
//! lean-canvas-cli calculate --average-price 100 --cost-per-unit 50 --fixed-costs 1000 \
//!     --cac 25 --monthly-new-customers 50 --customer-lifetime 12
//!
//! # Calculate from a JSON or YAML file and print a text report
//! lean-canvas-cli --format text calculate --input canvas.json
//!
//! # Evaluate what-if scenarios and append them to a JSON lines store
//! lean-canvas-cli scenarios --input scenarios.yaml --store results.jsonl
//!
//! # Show the effective configuration
//! lean-canvas-cli config
//! ```

mod commands;

use clap::{Parser, Subcommand};
use lean_canvas::config::AppConfig;
use lean_canvas::constants::{env_keys, service_names};
use lean_canvas::errors::AppResult;
use lean_canvas::formatters::OutputFormat;
use lean_canvas::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "lean-canvas-cli",
    version,
    about = "Lean Canvas financial KPI calculator",
    long_about = "Calculates unit economics, health tiers and recommendations for the financial block of a Lean Canvas."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (json, yaml, text); defaults to LEAN_CANVAS_OUTPUT or json
    #[arg(long, short = 'f', global = true)]
    format: Option<OutputFormat>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// The six canvas inputs as flags
#[derive(clap::Args)]
struct InputFlags {
    /// Selling price per unit
    #[arg(long, allow_negative_numbers = true)]
    average_price: Option<f64>,

    /// Variable cost per unit
    #[arg(long, allow_negative_numbers = true)]
    cost_per_unit: Option<f64>,

    /// Monthly fixed costs
    #[arg(long, allow_negative_numbers = true)]
    fixed_costs: Option<f64>,

    /// Customer acquisition cost
    #[arg(long = "cac", allow_negative_numbers = true)]
    customer_acquisition_cost: Option<f64>,

    /// New customers per month
    #[arg(long, allow_negative_numbers = true)]
    monthly_new_customers: Option<f64>,

    /// Average customer lifetime in months
    #[arg(long = "customer-lifetime", allow_negative_numbers = true)]
    average_customer_lifetime: Option<f64>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate metrics for one set of inputs
    Calculate {
        #[command(flatten)]
        flags: InputFlags,

        /// Read inputs from a JSON or YAML file instead of flags
        #[arg(long, short = 'i', conflicts_with_all = [
            "average_price",
            "cost_per_unit",
            "fixed_costs",
            "customer_acquisition_cost",
            "monthly_new_customers",
            "average_customer_lifetime",
        ])]
        input: Option<PathBuf>,

        /// Append the flattened result to a JSON lines file
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Evaluate a file of what-if scenarios
    Scenarios {
        /// JSON or YAML file with an array of inputs
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Append the flattened results to a JSON lines file
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

fn init_logging(verbose: bool) {
    let mut logging = LoggingConfig::from_env().with_service_name(service_names::LEAN_CANVAS_CLI);
    if verbose {
        logging = logging.with_level("debug");
    } else if env::var(env_keys::RUST_LOG).is_err() {
        logging = logging.with_level("warn");
    }

    if let Err(e) = logging.init() {
        eprintln!("warning: logging disabled: {e:#}");
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let format = cli.format.unwrap_or(config.output_format);
    let output = commands::Output {
        format,
        pretty: !cli.compact,
    };
    debug!(%format, "output format selected");

    match cli.command {
        Command::Calculate {
            flags,
            input,
            store,
        } => {
            let inputs = match input {
                Some(path) => lean_canvas::services::load_inputs(&path)?,
                None => flags.into_inputs()?,
            };
            commands::calculate::run(&config, &inputs, store.as_deref(), output)
        }
        Command::Scenarios { input, store } => {
            commands::scenarios::run(&config, &input, store.as_deref(), output)
        }
        Command::Config => commands::config::run(&config, output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e);
            eprintln!("error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}
