// ABOUTME: Four-phase weekly mileage periodization (base, build, peak, taper)
// ABOUTME: Computes per-week mileage targets and applies them to an existing plan schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Weekly mileage periodization
//!
//! A plan of `T` weeks is split into phases of `⌊0.4T⌋` base, `⌊0.3T⌋`
//! build and `⌊0.2T⌋` peak weeks; the taper absorbs the remainder.
//!
//! | Phase | Mileage (share of peak) |
//! |-------|-------------------------|
//! | Base  | 50% → 70%               |
//! | Build | 70% → 90%               |
//! | Peak  | 100%                    |
//! | Taper | 80% → 50%               |
//!
//! A zero-length phase counts as fully progressed. With a validated week
//! number that case is unreachable, but the divisor is still guarded.

use crate::physiological_constants::periodization::{
    BASE_FRACTION, BASE_START, BUILD_FRACTION, BUILD_START, PEAK_FRACTION, RAMP, TAPER_DROP,
    TAPER_START,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{RunningPlanData, WeekPlan};
use tracing::debug;

/// Training phase a week belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingPhase {
    /// Aerobic base building
    Base,
    /// Increasing volume and intensity
    Build,
    /// Maximum weekly volume
    Peak,
    /// Volume reduction before race day
    Taper,
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
        };
        f.write_str(name)
    }
}

/// Phase lengths for a plan of a given length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseBreakdown {
    /// Total plan length in weeks
    pub total_weeks: u32,
    /// Weeks in the base phase
    pub base_weeks: u32,
    /// Weeks in the build phase
    pub build_weeks: u32,
    /// Weeks at peak mileage
    pub peak_weeks: u32,
    /// Weeks in the taper (absorbs the rounding remainder)
    pub taper_weeks: u32,
}

impl PhaseBreakdown {
    /// Split a plan of `total_weeks` into phases
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `total_weeks` is zero.
    pub fn for_plan(total_weeks: u32) -> AppResult<Self> {
        if total_weeks == 0 {
            return Err(AppError::invalid_input("Plan must have at least one week"));
        }

        let share = |fraction: f64| (f64::from(total_weeks) * fraction).floor() as u32;
        let base_weeks = share(BASE_FRACTION);
        let build_weeks = share(BUILD_FRACTION);
        let peak_weeks = share(PEAK_FRACTION);

        Ok(Self {
            total_weeks,
            base_weeks,
            build_weeks,
            peak_weeks,
            taper_weeks: total_weeks - (base_weeks + build_weeks + peak_weeks),
        })
    }

    /// Phase of a 1-based week number
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `week` is outside `1..=total_weeks`.
    pub fn phase_for_week(&self, week: u32) -> AppResult<TrainingPhase> {
        if week == 0 || week > self.total_weeks {
            return Err(AppError::invalid_input(format!(
                "Week {week} is outside the plan (1-{})",
                self.total_weeks
            )));
        }

        let phase = if week <= self.base_weeks {
            TrainingPhase::Base
        } else if week <= self.build_end() {
            TrainingPhase::Build
        } else if week <= self.peak_end() {
            TrainingPhase::Peak
        } else {
            TrainingPhase::Taper
        };
        Ok(phase)
    }

    const fn build_end(&self) -> u32 {
        self.base_weeks + self.build_weeks
    }

    const fn peak_end(&self) -> u32 {
        self.base_weeks + self.build_weeks + self.peak_weeks
    }
}

/// Target mileage for `current_week` of a `total_weeks` plan peaking at `peak_mileage`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the plan is empty, the week is outside
/// `1..=total_weeks`, or `peak_mileage` is negative or not finite, and
/// `AppError::ValueOutOfRange` if the target does not fit in a `u32`.
pub fn weekly_mileage(current_week: u32, total_weeks: u32, peak_mileage: f64) -> AppResult<u32> {
    if !peak_mileage.is_finite() || peak_mileage < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Peak mileage must be zero or positive, got {peak_mileage}"
        )));
    }

    let phases = PhaseBreakdown::for_plan(total_weeks)?;
    let week = f64::from(current_week);

    // Unfused arithmetic: .5 boundaries must round the same as existing plans.
    #[allow(clippy::suboptimal_flops)]
    let share = match phases.phase_for_week(current_week)? {
        TrainingPhase::Base => {
            if phases.base_weeks == 0 {
                BASE_START + RAMP
            } else {
                BASE_START + RAMP * week / f64::from(phases.base_weeks)
            }
        }
        TrainingPhase::Build => {
            BUILD_START + RAMP * progress(week - f64::from(phases.base_weeks), phases.build_weeks)
        }
        TrainingPhase::Peak => 1.0,
        TrainingPhase::Taper => {
            TAPER_START
                - TAPER_DROP * progress(week - f64::from(phases.peak_end()), phases.taper_weeks)
        }
    };

    let target = (peak_mileage * share).round();
    if target > f64::from(u32::MAX) {
        return Err(AppError::value_out_of_range(format!(
            "Week {current_week} mileage target {target} exceeds {}",
            u32::MAX
        )));
    }

    Ok(target as u32)
}

/// Mileage target for every week of a plan of `total_weeks`
///
/// # Errors
///
/// Same conditions as [`weekly_mileage`].
pub fn mileage_schedule(total_weeks: u32, peak_mileage: f64) -> AppResult<Vec<u32>> {
    (1..=total_weeks)
        .map(|week| weekly_mileage(week, total_weeks, peak_mileage))
        .collect()
}

/// Apply periodized mileage targets to an existing plan
///
/// Each week's `weekly_mileage` becomes its target. Run distances are scaled
/// proportionally and rounded to a tenth; zero-mileage runs stay at zero. A
/// week whose runs sum to zero keeps its runs and only takes the target.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the plan fails validation or the peak
/// mileage is invalid, and `AppError::ValueOutOfRange` if a weekly target
/// overflows.
pub fn periodize_plan(plan: &RunningPlanData, peak_mileage: f64) -> AppResult<RunningPlanData> {
    plan.validate()?;

    let schedule = plan
        .schedule
        .iter()
        .map(|week| {
            let target = weekly_mileage(week.week_number, plan.weeks, peak_mileage)?;
            Ok(scale_week(week, f64::from(target)))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(RunningPlanData {
        weeks: plan.weeks,
        schedule,
    })
}

fn scale_week(week: &WeekPlan, target: f64) -> WeekPlan {
    let current = week.runs_mileage();
    debug!(
        week = week.week_number,
        current_mileage = current,
        target_mileage = target,
        "Scaling week to periodized mileage"
    );

    let runs = if current > 0.0 {
        let factor = target / current;
        week.runs
            .iter()
            .map(|run| run.with_mileage(round_tenth(run.mileage * factor)))
            .collect()
    } else {
        week.runs.clone()
    };

    WeekPlan {
        week_number: week.week_number,
        weekly_mileage: target,
        unit: week.unit,
        runs,
    }
}

fn progress(elapsed: f64, phase_weeks: u32) -> f64 {
    if phase_weeks == 0 {
        1.0
    } else {
        elapsed / f64::from(phase_weeks)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_breakdown_ten_weeks() {
        let phases = PhaseBreakdown::for_plan(10).unwrap();
        assert_eq!(
            (phases.base_weeks, phases.build_weeks, phases.peak_weeks, phases.taper_weeks),
            (4, 3, 2, 1)
        );
        assert_eq!(phases.phase_for_week(4).unwrap(), TrainingPhase::Base);
        assert_eq!(phases.phase_for_week(7).unwrap(), TrainingPhase::Build);
        assert_eq!(phases.phase_for_week(9).unwrap(), TrainingPhase::Peak);
        assert_eq!(phases.phase_for_week(10).unwrap(), TrainingPhase::Taper);
    }

    #[test]
    fn test_one_week_plan_is_all_taper() {
        let phases = PhaseBreakdown::for_plan(1).unwrap();
        assert_eq!(phases.taper_weeks, 1);
        assert_eq!(weekly_mileage(1, 1, 40.0).unwrap(), 20);
    }

    #[test]
    fn test_progress_guards_empty_phase() {
        assert!((progress(3.0, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_tenth() {
        assert!((round_tenth(3.333_33) - 3.3).abs() < 1e-9);
    }
}
