// ABOUTME: Algorithm layer for running performance estimation
// ABOUTME: Enum-based selection between Daniels VDOT and Riegel power-law methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Algorithm Selection Module
//!
//! Each estimation method is a variant of [`VdotAlgorithm`]; the free
//! functions underneath are re-exported for callers that need one formula.
//!
//! # Example
//!
//! ```rust
//! use stride_intelligence::algorithms::VdotAlgorithm;
//!
//! let vdot = VdotAlgorithm::Daniels.calculate_vdot(5_000.0, 1_200.0)?;
//! assert!((vdot - 49.8).abs() < 0.1);
//! # Ok::<(), stride_core::errors::AppError>(())
//! ```

pub mod riegel;
pub mod vdot;

pub use riegel::{
    calculate_race_paces, calculate_race_paces_with_exponent, riegel, riegel_default,
    riegel_time_seconds, RacePrediction, RiegelPrediction,
};
pub use vdot::{
    calculate_vo2max_jack_daniels, predict_pace_from_vdot, predict_time_from_vdot, VdotAlgorithm,
};
