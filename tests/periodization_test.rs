// ABOUTME: Integration tests for weekly mileage periodization
// ABOUTME: Reference 10-week schedule, phase boundaries, short plans, and plan scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use stride_coach::errors::ErrorCode;
use stride_coach::intelligence::{
    mileage_schedule, periodize_plan, weekly_mileage, PhaseBreakdown, TrainingPhase,
};

#[test]
fn test_ten_week_reference_values() {
    assert_eq!(weekly_mileage(1, 10, 50.0).unwrap(), 28);
    assert_eq!(weekly_mileage(5, 10, 50.0).unwrap(), 38);
    assert_eq!(weekly_mileage(8, 10, 50.0).unwrap(), 50);
    assert_eq!(weekly_mileage(10, 10, 50.0).unwrap(), 25);
}

#[test]
fn test_full_ten_week_schedule() {
    assert_eq!(
        mileage_schedule(10, 50.0).unwrap(),
        vec![28, 30, 33, 35, 38, 42, 45, 50, 50, 25]
    );
}

#[test]
fn test_peak_weeks_hit_full_mileage() {
    let phases = PhaseBreakdown::for_plan(16).unwrap();
    for week in 1..=16 {
        if phases.phase_for_week(week).unwrap() == TrainingPhase::Peak {
            assert_eq!(weekly_mileage(week, 16, 60.0).unwrap(), 60);
        }
    }
}

#[test]
fn test_short_plans_never_divide_by_zero() {
    for total in 1..=4 {
        for week in 1..=total {
            let mileage = weekly_mileage(week, total, 40.0).unwrap();
            assert!(mileage <= 40, "week {week}/{total} gave {mileage}");
        }
    }
    // Two weeks: no base, build or peak weeks; the taper covers both.
    assert_eq!(mileage_schedule(2, 40.0).unwrap(), vec![26, 20]);
}

#[test]
fn test_invalid_arguments() {
    for (week, total, peak) in [(0, 10, 50.0), (11, 10, 50.0), (1, 0, 50.0), (1, 10, -5.0)] {
        assert_eq!(
            weekly_mileage(week, total, peak).unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }
    assert_eq!(weekly_mileage(3, 10, 0.0).unwrap(), 0);
}

#[test]
fn test_huge_peak_is_out_of_range() {
    assert_eq!(
        weekly_mileage(8, 10, 1e12).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        mileage_schedule(10, 1e12).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    let largest = f64::from(u32::MAX);
    assert_eq!(weekly_mileage(8, 10, largest).unwrap(), u32::MAX);
}

#[test]
fn test_periodize_plan_scales_runs() {
    let plan = common::uniform_plan(10);
    let periodized = periodize_plan(&plan, 50.0).unwrap();

    let first = &periodized.schedule[0];
    assert!((first.weekly_mileage - 28.0).abs() < f64::EPSILON);
    let total: f64 = first.runs.iter().map(|r| r.mileage).sum();
    assert!((total - 28.0).abs() < 0.3);
    assert_eq!(first.runs.len(), 5);
    assert_eq!(first.runs[4].day.as_deref(), Some("Sunday"));

    let last = &periodized.schedule[9];
    assert!((last.weekly_mileage - 25.0).abs() < f64::EPSILON);
    assert!((last.runs[4].mileage - 8.3).abs() < 1e-9);

    assert_eq!(plan, common::uniform_plan(10));
}

#[test]
fn test_periodize_rejects_malformed_plan() {
    let mut plan = common::uniform_plan(3);
    plan.weeks = 4;
    assert!(periodize_plan(&plan, 30.0).is_err());
}
