// ABOUTME: Main library entry point for the Stride running performance engine
// ABOUTME: Re-exports the engine crates and adds logging, configuration, and plan file I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![deny(unsafe_code)]

//! # Stride Coach
//!
//! Running-performance math and training-plan shaping for the Stride coaching
//! app. The web layer decodes request JSON and calls into this crate; nothing
//! here talks to a database or the network.
//!
//! ## Architecture
//!
//! - **`stride-core`**: errors, unit constants, plan and performance models
//! - **`stride-intelligence`**: codec, VDOT/Riegel, training paces, periodizer, customizer
//! - **this crate**: logging setup, environment configuration, plan files, `stride-cli`
//!
//! ## Example Usage
//!
//! ```rust
//! use stride_coach::intelligence::{riegel_default, weekly_mileage};
//!
//! let half = riegel_default(3600.0, 10_000.0, 21_097.5)?;
//! assert_eq!(half.total_time_sec, 7943);
//! assert_eq!(weekly_mileage(8, 10, 50.0)?, 50);
//! # Ok::<(), stride_coach::errors::AppError>(())
//! ```

/// Unified error handling (re-exported from `stride-core`)
pub mod errors;

/// Plan and performance models (re-exported from `stride-core`)
pub mod models;

/// Running performance engine (re-exported from `stride-intelligence`)
pub mod intelligence;

/// Service-level constants
pub mod constants;

/// Environment-driven configuration loading
pub mod config;

/// Structured logging setup
pub mod logging;

/// Reading and writing plan JSON files
pub mod plan_io;
