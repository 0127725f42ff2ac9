// ABOUTME: Logging configuration and structured logging setup for the engine and CLI
// ABOUTME: Configures log levels, formatters, and the stderr writer used by stride-cli
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Structured logging configuration
//!
//! Records are written to stderr so command output on stdout stays
//! machine-readable.

use crate::constants::{env_vars, service_names};
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use std::str::FromStr;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("Unknown log format: {other}")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::STRIDE_COACH.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = env::var(env_vars::LOG_FORMAT)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogFormat::Pretty);

        let environment =
            env::var(env_vars::ENVIRONMENT).unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var(env_vars::LOG_INCLUDE_LOCATION).is_ok(),
            include_thread: is_production || env::var(env_vars::LOG_INCLUDE_THREAD).is_ok(),
            service_name: env::var(env_vars::SERVICE_NAME)
                .unwrap_or_else(|_| service_names::STRIDE_COACH.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Configuration for command-line use: compact records, `warn` unless verbose
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        let base = Self::from_env();
        Self {
            level: if verbose {
                "debug".into()
            } else {
                env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
            },
            format: env::var(env_vars::LOG_FORMAT)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(LogFormat::Compact),
            ..base
        }
    }

    /// Filter applied by [`LoggingConfig::init`]
    ///
    /// `RUST_LOG` is the base when set; the engine crates always log at
    /// the configured level.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(&directive),
        );

        ["stride_coach", "stride_intelligence", "stride_core", "stride_cli"]
            .iter()
            .fold(base, |filter, target| {
                filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::INFO.into()),
                )
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();

        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread
                }
            }
        });

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Stride engine logging initialized: {}",
            config_summary
        );
    }
}

/// Engine-specific logging helpers
pub struct AppLogger;

impl AppLogger {
    /// Log a completed engine operation
    pub fn log_operation(operation: &str, success: bool, duration_us: u64) {
        info!(
            engine.operation = %operation,
            engine.success = %success,
            engine.duration_us = %duration_us,
            "Engine operation"
        );
    }

    /// Log a plan transformation (customize or periodize)
    pub fn log_plan_transform(transform: &str, weeks: u32, runs_before: usize, runs_after: usize) {
        info!(
            plan.transform = %transform,
            plan.weeks = %weeks,
            plan.runs_before = %runs_before,
            plan.runs_after = %runs_after,
            "Plan transformed"
        );
    }

    /// Log input the engine rejected
    pub fn log_rejected_input(operation: &str, reason: &str) {
        warn!(
            engine.operation = %operation,
            engine.reason = %reason,
            "Rejected input"
        );
    }
}
