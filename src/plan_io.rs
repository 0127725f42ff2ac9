// ABOUTME: Reads and writes training plans as camelCase JSON files
// ABOUTME: Loaded plans are validated before any engine operation sees them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::errors::{AppError, AppResult};
use crate::models::RunningPlanData;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a plan from a JSON string and check its structure
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` for malformed JSON and
/// `ErrorCode::InvalidInput` if the plan fails validation.
pub fn parse_plan(json: &str) -> AppResult<RunningPlanData> {
    let plan: RunningPlanData = serde_json::from_str(json)?;
    plan.validate()?;
    Ok(plan)
}

/// Load a plan from a JSON file
///
/// # Errors
///
/// Returns `ErrorCode::ResourceNotFound` if the file does not exist, plus the
/// conditions of [`parse_plan`].
pub fn load_plan(path: impl AsRef<Path>) -> AppResult<RunningPlanData> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(serde_json::json!({ "path": path.display().to_string() }))
    })?;
    let plan = parse_plan(&contents)?;

    debug!(
        path = %path.display(),
        weeks = plan.weeks,
        "Loaded plan"
    );

    Ok(plan)
}

/// Serialize a plan as pretty-printed JSON
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if serialization fails.
pub fn plan_to_json(plan: &RunningPlanData) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Write a plan to a JSON file, replacing any existing file
///
/// # Errors
///
/// Returns `ErrorCode::StorageError` if the file cannot be written.
pub fn save_plan(path: impl AsRef<Path>, plan: &RunningPlanData) -> AppResult<()> {
    let path = path.as_ref();
    fs::write(path, plan_to_json(plan)?)?;
    debug!(path = %path.display(), weeks = plan.weeks, "Saved plan");
    Ok(())
}
