// ABOUTME: Integration tests for logging configuration from the environment
// ABOUTME: Covers format selection, production defaults, and CLI verbosity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use stride_coach::logging::{LogFormat, LoggingConfig};

const VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
    "ENVIRONMENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config, LoggingConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_THREAD", "1");
    env::set_var("SERVICE_NAME", "stride-worker");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_thread);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "stride-worker");
}

#[test]
#[serial]
fn test_production_enables_location_and_threads() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    let config = LoggingConfig::from_env();
    clear_env();

    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.environment, "production");
}

#[test]
#[serial]
fn test_cli_config_is_quiet_unless_verbose() {
    clear_env();
    let quiet = LoggingConfig::for_cli(false);
    let verbose = LoggingConfig::for_cli(true);

    assert_eq!(quiet.level, "warn");
    assert_eq!(quiet.format, LogFormat::Compact);
    assert_eq!(verbose.level, "debug");
}
