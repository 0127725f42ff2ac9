// ABOUTME: Engine configuration module: prediction and plan shaping settings
// ABOUTME: Typed config structs with defaults, environment loading, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Engine configuration
//!
//! Only tuning knobs live here. Published coefficients (Daniels formula,
//! training-pace multipliers, phase fractions) are constants in
//! [`crate::physiological_constants`].

mod error;
mod plan;
mod prediction;

pub use error::ConfigError;
pub use plan::PlanConfig;
pub use prediction::PredictionConfig;

use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Race prediction settings
    pub prediction: PredictionConfig,
    /// Plan shaping defaults
    pub plan: PlanConfig,
}

impl EngineConfig {
    /// Load every section from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            prediction: PredictionConfig::from_env(),
            plan: PlanConfig::from_env(),
        }
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.prediction.validate()?;
        self.plan.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.prediction.riegel_exponent - 1.06).abs() < f64::EPSILON);
        assert_eq!(config.plan.default_runs_per_week, 4);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("STRIDE_RIEGEL_EXPONENT", "1.08");
        env::set_var("STRIDE_RUNS_PER_WEEK", "5");
        env::set_var("STRIDE_INCLUDE_CROSS_TRAINING", "true");

        let config = EngineConfig::from_env();

        env::remove_var("STRIDE_RIEGEL_EXPONENT");
        env::remove_var("STRIDE_RUNS_PER_WEEK");
        env::remove_var("STRIDE_INCLUDE_CROSS_TRAINING");

        assert!((config.prediction.riegel_exponent - 1.08).abs() < f64::EPSILON);
        assert_eq!(config.plan.default_runs_per_week, 5);
        assert!(config.plan.include_cross_training);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_unparseable_env_falls_back_to_default() {
        env::set_var("STRIDE_RIEGEL_EXPONENT", "steep");
        let config = PredictionConfig::from_env();
        env::remove_var("STRIDE_RIEGEL_EXPONENT");

        assert!((config.riegel_exponent - 1.06).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validation_rejects_out_of_range() {
        let prediction = PredictionConfig {
            riegel_exponent: 0.9,
        };
        assert!(prediction.validate().is_err());

        let plan = PlanConfig {
            default_runs_per_week: 7,
            include_cross_training: false,
        };
        assert!(plan.validate().is_err());
    }
}
