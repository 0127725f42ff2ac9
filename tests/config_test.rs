// ABOUTME: Integration tests for environment-driven engine configuration
// ABOUTME: Serialized because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use stride_coach::config::{load_engine_config, EngineConfig};
use stride_coach::errors::ErrorCode;

const VARS: [&str; 3] = [
    "STRIDE_RIEGEL_EXPONENT",
    "STRIDE_RUNS_PER_WEEK",
    "STRIDE_INCLUDE_CROSS_TRAINING",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = load_engine_config().unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("STRIDE_RIEGEL_EXPONENT", "1.04");
    env::set_var("STRIDE_RUNS_PER_WEEK", "3");
    env::set_var("STRIDE_INCLUDE_CROSS_TRAINING", "1");

    let config = load_engine_config();
    clear_env();

    let config = config.unwrap();
    assert!((config.prediction.riegel_exponent - 1.04).abs() < f64::EPSILON);
    assert_eq!(config.plan.default_runs_per_week, 3);
    assert!(config.plan.include_cross_training);
    assert_eq!(config.plan.customize_options().unwrap().runs_per_week, 3);
}

#[test]
#[serial]
fn test_out_of_range_value_is_config_error() {
    clear_env();
    env::set_var("STRIDE_RUNS_PER_WEEK", "7");
    let result = load_engine_config();
    clear_env();

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_out_of_range_exponent_is_config_error() {
    clear_env();
    env::set_var("STRIDE_RIEGEL_EXPONENT", "1.5");
    let result = load_engine_config();
    clear_env();

    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("riegel_exponent"));
}
