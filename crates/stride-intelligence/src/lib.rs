// ABOUTME: Running performance engine: pace codec, VDOT, Riegel, training paces, plan shaping
// ABOUTME: Pure, synchronous functions over value types from stride-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Deterministic running-performance math and training-plan shaping.
//! Every function is pure: it reads its arguments and returns a new value,
//! so concurrent callers need no coordination.
//!
//! Pipeline, leaves first:
//!
//! - [`codec`]: duration/pace strings in and out
//! - [`algorithms`]: VDOT estimation and its inverse, Riegel prediction
//! - [`training_paces`]: pace table from a race pace
//! - [`periodization`]: weekly mileage targets per phase
//! - [`plan_customizer`]: run-type mix per week

/// Duration and pace string parsing/formatting
pub mod codec;

/// VDOT and Riegel estimation algorithms
pub mod algorithms;

/// Engine configuration (Riegel exponent, plan defaults)
pub mod config;

/// Published physiological and periodization constants
pub mod physiological_constants;

/// Training-pace derivation from race pace
pub mod training_paces;

/// Four-phase weekly mileage periodization
pub mod periodization;

/// Per-week run-type customization
pub mod plan_customizer;

pub use algorithms::{
    calculate_race_paces, calculate_race_paces_with_exponent, calculate_vo2max_jack_daniels,
    predict_pace_from_vdot, predict_time_from_vdot, riegel, riegel_default, riegel_time_seconds,
    RacePrediction, RiegelPrediction, VdotAlgorithm,
};
pub use codec::{
    calculate_duration_from_pace, calculate_pace, format_pace, format_seconds, parse_duration,
    parse_pace, parse_performance, try_parse_duration, try_parse_pace,
};
pub use periodization::{
    mileage_schedule, periodize_plan, weekly_mileage, PhaseBreakdown, TrainingPhase,
};
pub use plan_customizer::{customize_plan_runs, CustomizeOptions};
pub use training_paces::{
    get_paces_from_race_pace, get_paces_from_race_pace_in, TrainingPaceSet, TrainingPaceTable,
};
