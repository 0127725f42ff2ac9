// ABOUTME: Service-level constants for the Stride binaries
// ABOUTME: Service names and environment variable names shared by logging and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

pub use stride_core::constants::*;

/// Service names used in structured logs
pub mod service_names {
    /// Default service name for the engine and its CLI
    pub const STRIDE_COACH: &str = "stride-coach";
}

/// Environment variable names read by the logging layer
pub mod env_vars {
    /// Output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line in log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread ids and names in log records
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Service name override
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Deployment environment (`development`, `production`)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
