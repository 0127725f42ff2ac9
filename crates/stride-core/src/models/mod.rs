// ABOUTME: Value types shared by the engine and its callers
// ABOUTME: Distance units, paces, performances, and training plan records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Plain value records. Nothing here keeps a reference to its inputs, and the
//! plan types are only ever transformed by building new values.

mod pace;
mod plan;
mod units;

pub use pace::{whole_seconds, Pace, Performance};
pub use plan::{PlannedRun, RunType, RunningPlanData, WeekPlan, CROSS_TRAINING_NOTE};
pub use units::DistanceUnit;
