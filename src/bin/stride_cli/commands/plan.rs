// ABOUTME: Plan commands for stride-cli
// ABOUTME: Periodized mileage schedules and plan file customization/periodization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::helpers::display::{emit, emit_plan, OutputFormat, Report};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use stride_coach::{
    errors::AppResult,
    intelligence::{
        customize_plan_runs, mileage_schedule, periodize_plan, CustomizeOptions, PhaseBreakdown,
        TrainingPhase,
    },
    logging::AppLogger,
    models::RunningPlanData,
    plan_io,
};

type Result<T> = AppResult<T>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeekTarget {
    week: u32,
    phase: TrainingPhase,
    mileage: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MileageReport {
    phases: PhaseBreakdown,
    weeks: Vec<WeekTarget>,
}

impl Report for MileageReport {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "Phases: {} base, {} build, {} peak, {} taper",
            self.phases.base_weeks,
            self.phases.build_weeks,
            self.phases.peak_weeks,
            self.phases.taper_weeks
        )];
        lines.extend(self.weeks.iter().map(|target| {
            format!(
                "Week {:>2}  {:<6} {:>4}",
                target.week,
                target.phase.to_string(),
                target.mileage
            )
        }));
        lines.join("\n")
    }
}

/// Print the periodized mileage target of every week
pub fn mileage(format: OutputFormat, weeks: u32, peak: f64) -> Result<()> {
    let phases = PhaseBreakdown::for_plan(weeks)?;
    let targets = mileage_schedule(weeks, peak)?;

    let weeks = (1..=weeks)
        .zip(targets)
        .map(|(week, mileage)| {
            Ok(WeekTarget {
                week,
                phase: phases.phase_for_week(week)?,
                mileage,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    emit(format, &MileageReport { phases, weeks })
}

/// Re-select the run types of a plan file
pub fn customize(
    format: OutputFormat,
    plan_path: &Path,
    runs_per_week: u8,
    include_cross_training: bool,
    output: Option<&Path>,
) -> Result<()> {
    let options = CustomizeOptions::new(runs_per_week, include_cross_training)?;
    let plan = plan_io::load_plan(plan_path)?;

    let started = Instant::now();
    let customized = customize_plan_runs(&plan, &options)?;
    log_transform("customize", &plan, &customized, started);

    emit_plan(format, &customized, output)
}

/// Apply periodized mileage targets to a plan file
pub fn periodize(
    format: OutputFormat,
    plan_path: &Path,
    peak: f64,
    output: Option<&Path>,
) -> Result<()> {
    let plan = plan_io::load_plan(plan_path)?;

    let started = Instant::now();
    let periodized = periodize_plan(&plan, peak)?;
    log_transform("periodize", &plan, &periodized, started);

    emit_plan(format, &periodized, output)
}

fn log_transform(
    transform: &str,
    before: &RunningPlanData,
    after: &RunningPlanData,
    started: Instant,
) {
    let count =
        |plan: &RunningPlanData| -> usize { plan.schedule.iter().map(|w| w.runs.len()).sum() };
    AppLogger::log_plan_transform(transform, after.weeks, count(before), count(after));
    AppLogger::log_operation(
        transform,
        true,
        u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
    );
}
