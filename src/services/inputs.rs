// ABOUTME: Decodes financial inputs from caller JSON or YAML documents
// ABOUTME: Non-numeric fields become NaN so the engine's sanitizer coerces them to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lean Canvas Contributors

use crate::errors::{AppError, AppResult};
use lean_canvas_core::models::FinancialInputs;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Document syntax of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl DocumentFormat {
    /// Pick the syntax from a file extension, JSON unless `.yaml`/`.yml`
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Parse text into a JSON value tree
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error when the text is not valid for this syntax
    pub fn parse(self, text: &str) -> AppResult<Value> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

/// Read a number the way a web form submits it: numbers, numeric strings, or nothing
fn lenient_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Build inputs from a JSON object with camelCase keys
///
/// Missing or non-numeric fields are kept as `NaN`; the engine coerces
/// them to zero and the analysis service reports which ones.
///
/// # Errors
///
/// Returns an `InvalidInput` error when `value` is not an object
pub fn inputs_from_value(value: &Value) -> AppResult<FinancialInputs> {
    let object = value
        .as_object()
        .ok_or_else(|| AppError::invalid_input("financial inputs must be an object"))?;

    let field = |name: &str| lenient_number(object.get(name));
    Ok(FinancialInputs::new(
        field("averagePrice"),
        field("costPerUnit"),
        field("fixedCosts"),
        field("customerAcquisitionCost"),
        field("monthlyNewCustomers"),
        field("averageCustomerLifetime"),
    ))
}

/// Load a single set of inputs from a JSON or YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an object
pub fn load_inputs(path: &Path) -> AppResult<FinancialInputs> {
    let text = fs::read_to_string(path)?;
    let value = DocumentFormat::from_path(path).parse(&text)?;
    inputs_from_value(&value)
        .map_err(|e| AppError::invalid_input(format!("{}: {}", path.display(), e.message)))
}

/// Load a list of scenarios from a JSON or YAML file
///
/// The document is either an array of input objects or an object with a
/// `scenarios` array.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has no scenario list, or
/// any entry is not an object
pub fn load_scenarios(path: &Path) -> AppResult<Vec<FinancialInputs>> {
    let text = fs::read_to_string(path)?;
    let value = DocumentFormat::from_path(path).parse(&text)?;

    let entries = match &value {
        Value::Array(entries) => entries,
        Value::Object(object) => match object.get("scenarios") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(AppError::missing_field("scenarios")),
        },
        _ => {
            return Err(AppError::invalid_input(
                "scenario file must contain an array of inputs",
            ))
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            inputs_from_value(entry).map_err(|e| {
                AppError::invalid_input(format!("scenario {}: {}", index + 1, e.message))
            })
        })
        .collect()
}
