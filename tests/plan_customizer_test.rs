// ABOUTME: Integration tests for per-week run-type customization
// ABOUTME: Run selection by parity, race-week passthrough, cross training, and option bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{full_week, run, week};
use stride_coach::errors::ErrorCode;
use stride_coach::intelligence::{customize_plan_runs, CustomizeOptions};
use stride_coach::models::{RunType, RunningPlanData, CROSS_TRAINING_NOTE};

fn types(plan: &RunningPlanData, index: usize) -> Vec<RunType> {
    plan.schedule[index].runs.iter().map(|r| r.run_type).collect()
}

#[test]
fn test_three_runs_keep_easy_quality_and_long() {
    let plan = common::uniform_plan(2);
    let options = CustomizeOptions::new(3, false).unwrap();
    let customized = customize_plan_runs(&plan, &options).unwrap();

    assert_eq!(types(&customized, 0), [RunType::Easy, RunType::Interval, RunType::Long]);
    assert_eq!(types(&customized, 1), [RunType::Easy, RunType::Tempo, RunType::Long]);

    // First easy (4) + interval (5) + long (10)
    assert!((customized.schedule[0].weekly_mileage - 19.0).abs() < f64::EPSILON);
    // First easy (4) + tempo (6) + long (10)
    assert!((customized.schedule[1].weekly_mileage - 20.0).abs() < f64::EPSILON);
    assert_eq!(customized.schedule[0].runs[0].day.as_deref(), Some("Monday"));
}

#[test]
fn test_four_runs_keep_second_easy() {
    let plan = common::uniform_plan(1);
    let options = CustomizeOptions::new(4, false).unwrap();
    let customized = customize_plan_runs(&plan, &options).unwrap();

    assert_eq!(
        types(&customized, 0),
        [RunType::Easy, RunType::Easy, RunType::Interval, RunType::Long]
    );
    assert!((customized.schedule[0].weekly_mileage - 24.0).abs() < f64::EPSILON);
}

#[test]
fn test_race_week_is_unchanged() {
    let plan = common::plan_with_race_week(4);
    let options = CustomizeOptions::new(3, true).unwrap();
    let customized = customize_plan_runs(&plan, &options).unwrap();

    assert_eq!(customized.schedule[3], plan.schedule[3]);
    assert_eq!(customized.weeks, 4);
}

#[test]
fn test_input_plan_is_not_modified() {
    let plan = common::plan_with_race_week(3);
    let snapshot = plan.clone();
    let _ = customize_plan_runs(&plan, &CustomizeOptions::new(3, true).unwrap()).unwrap();
    assert_eq!(plan, snapshot);
}

#[test]
fn test_cross_training_fills_slots_before_long_run() {
    let plan = RunningPlanData {
        weeks: 1,
        schedule: vec![week(
            1,
            vec![
                run(RunType::Easy, 4.0),
                run(RunType::Tempo, 6.0),
                run(RunType::Long, 12.0),
            ],
        )],
    };
    let options = CustomizeOptions::new(5, true).unwrap();
    let customized = customize_plan_runs(&plan, &options).unwrap();

    assert_eq!(
        types(&customized, 0),
        [
            RunType::Easy,
            RunType::Tempo,
            RunType::Cross,
            RunType::Cross,
            RunType::Long
        ]
    );
    let cross = &customized.schedule[0].runs[2];
    assert_eq!(cross.notes.as_deref(), Some(CROSS_TRAINING_NOTE));
    assert!(cross.mileage.abs() < f64::EPSILON);
    assert!((customized.schedule[0].weekly_mileage - 22.0).abs() < f64::EPSILON);
}

#[test]
fn test_without_cross_training_short_weeks_stay_short() {
    let plan = RunningPlanData {
        weeks: 1,
        schedule: vec![week(1, vec![run(RunType::Easy, 4.0), run(RunType::Long, 12.0)])],
    };
    let customized =
        customize_plan_runs(&plan, &CustomizeOptions::new(5, false).unwrap()).unwrap();
    assert_eq!(types(&customized, 0), [RunType::Easy, RunType::Long]);
}

#[test]
fn test_unknown_types_are_dropped() {
    let mut source = full_week(1);
    source.runs.insert(0, run(RunType::Fartlek, 3.0));
    let plan = RunningPlanData {
        weeks: 1,
        schedule: vec![source],
    };
    let customized = customize_plan_runs(&plan, &CustomizeOptions::default()).unwrap();
    assert!(!types(&customized, 0).contains(&RunType::Fartlek));
}

#[test]
fn test_runs_per_week_bounds() {
    let plan = common::uniform_plan(1);
    for runs_per_week in [0, 2, 6] {
        let options = CustomizeOptions {
            runs_per_week,
            include_cross_training: false,
        };
        assert_eq!(
            customize_plan_runs(&plan, &options).unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }
}
