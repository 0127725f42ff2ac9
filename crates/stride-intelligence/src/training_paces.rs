// ABOUTME: Derives the named training paces from a race pace with a fixed multiplier table
// ABOUTME: Easy, marathon, threshold, interval and race paces, published to the quarter minute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::physiological_constants::training_pace_multipliers::{
    EASY, INTERVAL, MARATHON, RACE, ROUNDING_SECONDS, THRESHOLD,
};
use serde::{Deserialize, Serialize};
use stride_core::models::{DistanceUnit, Pace};

/// Training paces derived from one race pace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingPaceSet {
    /// Easy/recovery runs
    pub easy: Pace,
    /// Marathon-pace runs
    pub marathon: Pace,
    /// Threshold/tempo runs
    pub threshold: Pace,
    /// Interval repeats
    pub interval: Pace,
    /// Goal race pace
    pub race: Pace,
}

/// String form of a [`TrainingPaceSet`], as returned to the web client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPaceTable {
    /// Easy pace (`M:SS`)
    pub easy: String,
    /// Marathon pace (`M:SS`)
    pub marathon: String,
    /// Threshold pace (`M:SS`)
    pub threshold: String,
    /// Interval pace (`M:SS`)
    pub interval: String,
    /// Race pace (`M:SS`)
    pub race: String,
}

impl TrainingPaceSet {
    /// Format every pace as `M:SS`
    #[must_use]
    pub fn to_table(&self) -> TrainingPaceTable {
        TrainingPaceTable {
            easy: self.easy.to_string(),
            marathon: self.marathon.to_string(),
            threshold: self.threshold.to_string(),
            interval: self.interval.to_string(),
            race: self.race.to_string(),
        }
    }

    /// The same paces expressed per a different unit of distance
    ///
    /// Converted paces keep full precision; they are not re-rounded to the
    /// quarter minute.
    #[must_use]
    pub fn converted_to(&self, unit: DistanceUnit) -> Self {
        Self {
            easy: self.easy.converted_to(unit),
            marathon: self.marathon.converted_to(unit),
            threshold: self.threshold.converted_to(unit),
            interval: self.interval.converted_to(unit),
            race: self.race.converted_to(unit),
        }
    }
}

/// Derive training paces from a race pace in seconds per mile
#[must_use]
pub fn get_paces_from_race_pace(race_pace_seconds: f64) -> TrainingPaceSet {
    get_paces_from_race_pace_in(DistanceUnit::Miles, race_pace_seconds)
}

/// Derive training paces from a race pace in seconds per `unit`
///
/// Multipliers: easy 1.25, marathon 1.05, threshold 0.95, interval 0.90,
/// race 1.00. Each result is rounded to the nearest 15 seconds, halves up.
#[must_use]
pub fn get_paces_from_race_pace_in(unit: DistanceUnit, race_pace_seconds: f64) -> TrainingPaceSet {
    let derive = |multiplier: f64| Pace::new(quarter_minute(race_pace_seconds * multiplier), unit);

    TrainingPaceSet {
        easy: derive(EASY),
        marathon: derive(MARATHON),
        threshold: derive(THRESHOLD),
        interval: derive(INTERVAL),
        race: derive(RACE),
    }
}

fn quarter_minute(seconds: f64) -> f64 {
    (seconds / ROUNDING_SECONDS).round() * ROUNDING_SECONDS
}
