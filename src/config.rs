// ABOUTME: Environment-driven engine configuration loading for binaries and services
// ABOUTME: Reads tuning knobs from the environment and rejects out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

pub use stride_intelligence::config::{ConfigError, EngineConfig, PlanConfig, PredictionConfig};

use crate::errors::AppResult;
use tracing::info;

/// Load and validate engine configuration from the environment
///
/// Unset or unparseable variables fall back to defaults; parsed values that
/// fall outside their accepted range are errors.
///
/// # Errors
///
/// Returns `AppError` with `ErrorCode::ConfigError` if a value is out of range.
pub fn load_engine_config() -> AppResult<EngineConfig> {
    let config = EngineConfig::from_env();
    config.validate()?;

    info!(
        riegel_exponent = config.prediction.riegel_exponent,
        runs_per_week = config.plan.default_runs_per_week,
        include_cross_training = config.plan.include_cross_training,
        "Engine configuration loaded"
    );

    Ok(config)
}
