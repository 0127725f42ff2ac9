// ABOUTME: Race prediction configuration (Riegel fatigue exponent)
// ABOUTME: Loaded from environment with defaults from the published formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use super::error::ConfigError;
use crate::physiological_constants::riegel::DEFAULT_FATIGUE_FACTOR;
use serde::{Deserialize, Serialize};
use std::env;

/// Smallest exponent accepted; below 1.0 longer races would be faster per km
const MIN_RIEGEL_EXPONENT: f64 = 1.0;

/// Largest exponent accepted
const MAX_RIEGEL_EXPONENT: f64 = 1.2;

/// Race prediction configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Riegel fatigue exponent (1.06 for typical runners, 1.03-1.08 by athlete)
    pub riegel_exponent: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            riegel_exponent: DEFAULT_FATIGUE_FACTOR,
        }
    }
}

impl PredictionConfig {
    /// Load prediction configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            riegel_exponent: env::var("STRIDE_RIEGEL_EXPONENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_FATIGUE_FACTOR),
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the exponent is outside 1.0-1.2.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_RIEGEL_EXPONENT..=MAX_RIEGEL_EXPONENT).contains(&self.riegel_exponent) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "riegel_exponent must be between 1.0 and 1.2",
            ))
        }
    }
}
