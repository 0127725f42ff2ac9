// ABOUTME: Shared test utilities for plan-based integration tests
// ABOUTME: Builds sample runs, weeks, and multi-week plans in the stored JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors
#![allow(
    dead_code,
    missing_docs,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `stride_coach`

use stride_coach::models::{DistanceUnit, PlannedRun, RunType, RunningPlanData, WeekPlan};

pub fn run(run_type: RunType, mileage: f64) -> PlannedRun {
    PlannedRun::new(run_type, DistanceUnit::Miles, mileage, "8:30")
}

pub fn week(week_number: u32, runs: Vec<PlannedRun>) -> WeekPlan {
    WeekPlan {
        week_number,
        weekly_mileage: runs.iter().map(|r| r.mileage).sum(),
        unit: DistanceUnit::Miles,
        runs,
    }
}

/// A full training week: two easy runs, tempo, intervals, and a long run
pub fn full_week(week_number: u32) -> WeekPlan {
    week(
        week_number,
        vec![
            run(RunType::Easy, 4.0).on_day("Monday"),
            run(RunType::Easy, 5.0).on_day("Tuesday"),
            run(RunType::Tempo, 6.0).on_day("Wednesday"),
            run(RunType::Interval, 5.0).on_day("Thursday"),
            run(RunType::Long, 10.0).on_day("Sunday"),
        ],
    )
}

/// Plan of `weeks` full weeks followed by a single race-day week
pub fn plan_with_race_week(weeks: u32) -> RunningPlanData {
    let mut schedule: Vec<WeekPlan> = (1..weeks).map(full_week).collect();
    schedule.push(week(
        weeks,
        vec![run(RunType::Race, 13.1).on_day("Sunday")],
    ));
    RunningPlanData { weeks, schedule }
}

/// Plan of `weeks` identical full weeks
pub fn uniform_plan(weeks: u32) -> RunningPlanData {
    RunningPlanData {
        weeks,
        schedule: (1..=weeks).map(full_week).collect(),
    }
}
