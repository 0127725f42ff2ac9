// ABOUTME: Core types and constants for the Stride running performance engine
// ABOUTME: Foundation crate with error handling, unit constants, and plan models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride
//! engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and standard race distances
//! - **models**: Distance units, paces, performances, and plan records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (`DistanceUnit`, `Pace`, `RunningPlanData`, ...)
pub mod models;
