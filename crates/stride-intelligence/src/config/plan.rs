// ABOUTME: Plan shaping defaults (runs per week, cross-training padding)
// ABOUTME: Loaded from environment and converted into customizer options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use super::error::ConfigError;
use crate::plan_customizer::CustomizeOptions;
use serde::{Deserialize, Serialize};
use std::env;

/// Plan shaping configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Sessions per week used when a request does not specify one
    pub default_runs_per_week: u8,
    /// Whether short weeks are padded with cross training by default
    pub include_cross_training: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        let options = CustomizeOptions::default();
        Self {
            default_runs_per_week: options.runs_per_week,
            include_cross_training: options.include_cross_training,
        }
    }
}

impl PlanConfig {
    /// Load plan configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_runs_per_week: env::var("STRIDE_RUNS_PER_WEEK")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_runs_per_week),
            include_cross_training: env::var("STRIDE_INCLUDE_CROSS_TRAINING")
                .ok()
                .map_or(defaults.include_cross_training, |v| {
                    v == "true" || v == "1"
                }),
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the default session count is outside 3-5.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.customize_options().map(|_| ())
    }

    /// Customizer options built from these defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the default session count is outside 3-5.
    pub fn customize_options(&self) -> Result<CustomizeOptions, ConfigError> {
        CustomizeOptions::new(self.default_runs_per_week, self.include_cross_training)
            .map_err(|_| ConfigError::ValueOutOfRange("default_runs_per_week must be between 3 and 5"))
    }
}
