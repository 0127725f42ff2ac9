// ABOUTME: Training plan records: planned runs, weeks, and the whole plan schedule
// ABOUTME: Field names serialize in camelCase to match the plan JSON stored by the web app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use super::DistanceUnit;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Note attached to cross-training placeholders
pub const CROSS_TRAINING_NOTE: &str = "Cross training";

/// Kind of session in a training week
///
/// Unknown run types coming from stored plans deserialize to `Other`
/// instead of failing the whole plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunType {
    /// Conversational aerobic run
    Easy,
    /// Sustained threshold effort
    Tempo,
    /// Repeats at or near VO2max pace
    Interval,
    /// Weekly long run
    Long,
    /// Long run at marathon pace
    Marathon,
    /// Non-running aerobic session
    Cross,
    /// Race day
    Race,
    /// Very easy recovery jog
    Recovery,
    /// Unstructured speed play
    Fartlek,
    /// Hill repeats
    Hills,
    /// Any type this engine does not recognize
    #[serde(other)]
    Other,
}

impl RunType {
    /// Whether this run fills the weekly long-run slot
    #[must_use]
    pub const fn is_long_run(self) -> bool {
        matches!(self, Self::Long | Self::Marathon)
    }

    /// Wire name of the run type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Tempo => "tempo",
            Self::Interval => "interval",
            Self::Long => "long",
            Self::Marathon => "marathon",
            Self::Cross => "cross",
            Self::Race => "race",
            Self::Recovery => "recovery",
            Self::Fartlek => "fartlek",
            Self::Hills => "hills",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scheduled session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRun {
    /// Session type
    #[serde(rename = "type")]
    pub run_type: RunType,
    /// Unit of `mileage`
    pub unit: DistanceUnit,
    /// Planned distance
    pub mileage: f64,
    /// Target pace as `M:SS`, empty when not applicable
    #[serde(default)]
    pub target_pace: String,
    /// Day of week label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Free-form coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlannedRun {
    /// Create a run with no day or notes
    pub fn new(
        run_type: RunType,
        unit: DistanceUnit,
        mileage: f64,
        target_pace: impl Into<String>,
    ) -> Self {
        Self {
            run_type,
            unit,
            mileage,
            target_pace: target_pace.into(),
            day: None,
            notes: None,
        }
    }

    /// Zero-mileage cross-training slot used to pad a week to its session count
    #[must_use]
    pub fn cross_training_placeholder(unit: DistanceUnit) -> Self {
        Self {
            run_type: RunType::Cross,
            unit,
            mileage: 0.0,
            target_pace: String::new(),
            day: None,
            notes: Some(CROSS_TRAINING_NOTE.to_owned()),
        }
    }

    /// Builder-style day label
    #[must_use]
    pub fn on_day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    /// Copy of this run with a different distance
    #[must_use]
    pub fn with_mileage(&self, mileage: f64) -> Self {
        Self {
            mileage,
            ..self.clone()
        }
    }
}

/// One week of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    /// 1-based position in the plan
    pub week_number: u32,
    /// Total planned distance for the week
    pub weekly_mileage: f64,
    /// Unit of `weekly_mileage`
    pub unit: DistanceUnit,
    /// Sessions in display order
    pub runs: Vec<PlannedRun>,
}

impl WeekPlan {
    /// Sum of the mileage of every run in the week
    #[must_use]
    pub fn runs_mileage(&self) -> f64 {
        self.runs.iter().map(|run| run.mileage).sum()
    }
}

/// A complete plan: a week count and one schedule entry per week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningPlanData {
    /// Number of weeks, at least 1
    pub weeks: u32,
    /// Per-week schedule, `schedule.len() == weeks`
    pub schedule: Vec<WeekPlan>,
}

impl RunningPlanData {
    /// Check the structural invariants of a plan
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the plan has no weeks, the schedule
    /// length disagrees with `weeks`, or week numbers are not `1..=weeks` in order.
    pub fn validate(&self) -> AppResult<()> {
        if self.weeks == 0 {
            return Err(AppError::invalid_input("Plan must have at least one week"));
        }

        if self.schedule.len() != self.weeks as usize {
            return Err(AppError::invalid_input(format!(
                "Plan declares {} weeks but schedule has {} entries",
                self.weeks,
                self.schedule.len()
            )));
        }

        for (expected, week) in (1..=self.weeks).zip(&self.schedule) {
            if week.week_number != expected {
                return Err(AppError::invalid_input(format!(
                    "Week number {} found where week {expected} was expected",
                    week.week_number
                )));
            }
        }

        Ok(())
    }
}
