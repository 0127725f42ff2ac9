// ABOUTME: Re-selects the run types of each plan week to match a target runs-per-week
// ABOUTME: Keeps easy, alternating tempo/interval and long runs, optionally padding with cross training
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::physiological_constants::runs_per_week::{MAX, MIN, SECOND_EASY_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{PlannedRun, RunType, RunningPlanData, WeekPlan};
use tracing::debug;

/// Options for [`customize_plan_runs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeOptions {
    /// Target sessions per week, 3 to 5
    pub runs_per_week: u8,
    /// Pad short weeks with cross-training placeholders
    #[serde(default)]
    pub include_cross_training: bool,
}

impl Default for CustomizeOptions {
    fn default() -> Self {
        Self {
            runs_per_week: 4,
            include_cross_training: false,
        }
    }
}

impl CustomizeOptions {
    /// Build validated options
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `runs_per_week` is outside 3-5.
    pub fn new(runs_per_week: u8, include_cross_training: bool) -> AppResult<Self> {
        let options = Self {
            runs_per_week,
            include_cross_training,
        };
        options.validate()?;
        Ok(options)
    }

    /// Check the runs-per-week bounds
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `runs_per_week` is outside 3-5.
    pub fn validate(&self) -> AppResult<()> {
        if (MIN..=MAX).contains(&self.runs_per_week) {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "Runs per week must be between {MIN} and {MAX}, got {}",
                self.runs_per_week
            ))
            .with_details(serde_json::json!({ "runsPerWeek": self.runs_per_week })))
        }
    }
}

/// Return a new plan whose weeks hold the run mix for `options.runs_per_week`
///
/// Weeks with zero or one run (race weeks) are copied unchanged. For the
/// others: the first easy run is kept, plus a second one at 4+ runs per
/// week; even-indexed weeks take an interval session and odd-indexed weeks a
/// tempo session, falling back to whichever exists; the first long or
/// marathon run goes last. Cross-training placeholders fill any remaining
/// slots just before the long run when enabled. Weekly mileage is the sum of
/// the kept runs.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `runs_per_week` is outside 3-5.
pub fn customize_plan_runs(
    plan: &RunningPlanData,
    options: &CustomizeOptions,
) -> AppResult<RunningPlanData> {
    options.validate()?;

    let schedule = plan
        .schedule
        .iter()
        .enumerate()
        .map(|(index, week)| customize_week(index, week, options))
        .collect();

    Ok(RunningPlanData {
        weeks: plan.weeks,
        schedule,
    })
}

fn customize_week(index: usize, week: &WeekPlan, options: &CustomizeOptions) -> WeekPlan {
    if week.runs.len() <= 1 {
        return week.clone();
    }

    let by_type = partition_by_type(&week.runs);
    let first = |run_type: RunType| by_type.get(&run_type).and_then(|runs| runs.first().copied());

    let easy_quota = if options.runs_per_week >= SECOND_EASY_THRESHOLD {
        2
    } else {
        1
    };
    let (preferred, fallback) = if index % 2 == 0 {
        (RunType::Interval, RunType::Tempo)
    } else {
        (RunType::Tempo, RunType::Interval)
    };
    let quality = first(preferred).or_else(|| first(fallback));
    let long = week.runs.iter().find(|run| run.run_type.is_long_run());

    let mut runs: Vec<PlannedRun> = by_type
        .get(&RunType::Easy)
        .into_iter()
        .flatten()
        .copied()
        .take(easy_quota)
        .chain(quality)
        .cloned()
        .collect();

    let target = usize::from(options.runs_per_week);
    let with_long = runs.len() + usize::from(long.is_some());
    if options.include_cross_training && with_long < target {
        runs.extend(
            std::iter::repeat_with(|| PlannedRun::cross_training_placeholder(week.unit))
                .take(target - with_long),
        );
    }
    runs.extend(long.cloned());

    let customized = WeekPlan {
        week_number: week.week_number,
        weekly_mileage: runs.iter().map(|run| run.mileage).sum(),
        unit: week.unit,
        runs,
    };

    debug!(
        week = week.week_number,
        original_runs = week.runs.len(),
        kept_runs = customized.runs.len(),
        weekly_mileage = customized.weekly_mileage,
        "Customized week"
    );

    customized
}

fn partition_by_type(runs: &[PlannedRun]) -> HashMap<RunType, Vec<&PlannedRun>> {
    let mut by_type: HashMap<RunType, Vec<&PlannedRun>> = HashMap::new();
    for run in runs {
        by_type.entry(run.run_type).or_default().push(run);
    }
    by_type
}
