// ABOUTME: Riegel power-law race time prediction with per-km and per-mile paces
// ABOUTME: Predicts a finishing time at a new distance from one known performance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::codec::{format_pace, format_seconds};
use crate::physiological_constants::riegel::DEFAULT_FATIGUE_FACTOR;
use serde::{Deserialize, Serialize};
use stride_core::constants::race_distances::STANDARD_RACES;
use stride_core::constants::units::{METERS_PER_KM, METERS_PER_MILE, SECONDS_PER_MINUTE};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::whole_seconds;
use tracing::debug;

/// Result of a single Riegel prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiegelPrediction {
    /// Predicted finishing time, rounded to whole seconds
    pub total_time_sec: u64,
    /// Average pace per kilometer (`M:SS`)
    pub pace_per_km: String,
    /// Average pace per mile (`M:SS`)
    pub pace_per_mile: String,
}

/// Prediction for one of the standard race distances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacePrediction {
    /// Race label ("5K", "10K", "Half Marathon", "Marathon")
    pub name: String,
    /// Race distance in kilometers
    pub distance_km: f64,
    /// Predicted finishing time in whole seconds
    pub predicted_time_seconds: u64,
    /// Predicted finishing time as `HH:MM:SS`
    pub predicted_time: String,
    /// Average pace per kilometer (`M:SS`)
    pub pace_per_km: String,
    /// Average pace per mile (`M:SS`)
    pub pace_per_mile: String,
}

/// Unrounded Riegel prediction: `T2 = T1 x (D2 / D1)^fatigue_factor`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if any time, distance or the exponent is
/// not a positive finite number.
pub fn riegel_time_seconds(
    known_time_seconds: f64,
    known_distance_meters: f64,
    new_distance_meters: f64,
    fatigue_factor: f64,
) -> AppResult<f64> {
    for (name, value) in [
        ("Known time", known_time_seconds),
        ("Known distance", known_distance_meters),
        ("Target distance", new_distance_meters),
        ("Fatigue factor", fatigue_factor),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "{name} must be positive, got {value}"
            )));
        }
    }

    let distance_ratio = new_distance_meters / known_distance_meters;
    Ok(known_time_seconds * distance_ratio.powf(fatigue_factor))
}

/// Predict a finishing time and paces at a new distance
///
/// Paces are derived from the rounded total time.
///
/// # Errors
///
/// Same conditions as [`riegel_time_seconds`].
pub fn riegel(
    known_time_seconds: f64,
    known_distance_meters: f64,
    new_distance_meters: f64,
    fatigue_factor: f64,
) -> AppResult<RiegelPrediction> {
    let predicted = riegel_time_seconds(
        known_time_seconds,
        known_distance_meters,
        new_distance_meters,
        fatigue_factor,
    )?;
    let total_time_sec = whole_seconds(predicted);
    let total = total_time_sec as f64;

    Ok(RiegelPrediction {
        total_time_sec,
        pace_per_km: format_pace(total / (new_distance_meters / METERS_PER_KM)),
        pace_per_mile: format_pace(total / (new_distance_meters / METERS_PER_MILE)),
    })
}

/// [`riegel`] with the standard 1.06 fatigue factor
///
/// # Errors
///
/// Same conditions as [`riegel_time_seconds`].
pub fn riegel_default(
    known_time_seconds: f64,
    known_distance_meters: f64,
    new_distance_meters: f64,
) -> AppResult<RiegelPrediction> {
    riegel(
        known_time_seconds,
        known_distance_meters,
        new_distance_meters,
        DEFAULT_FATIGUE_FACTOR,
    )
}

/// Predict 5K, 10K, half marathon and marathon results from one performance
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the time or distance is not positive.
pub fn calculate_race_paces(time_minutes: f64, distance_km: f64) -> AppResult<Vec<RacePrediction>> {
    calculate_race_paces_with_exponent(time_minutes, distance_km, DEFAULT_FATIGUE_FACTOR)
}

/// [`calculate_race_paces`] with an explicit fatigue factor
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the time, distance or exponent is not positive.
pub fn calculate_race_paces_with_exponent(
    time_minutes: f64,
    distance_km: f64,
    fatigue_factor: f64,
) -> AppResult<Vec<RacePrediction>> {
    let known_time_seconds = time_minutes * SECONDS_PER_MINUTE;
    let known_distance_meters = distance_km * METERS_PER_KM;

    debug!(
        known_time_seconds,
        known_distance_meters, fatigue_factor, "Predicting standard race distances"
    );

    STANDARD_RACES
        .iter()
        .map(|&(name, race_km)| {
            let prediction = riegel(
                known_time_seconds,
                known_distance_meters,
                race_km * METERS_PER_KM,
                fatigue_factor,
            )?;
            Ok(RacePrediction {
                name: name.to_owned(),
                distance_km: race_km,
                predicted_time_seconds: prediction.total_time_sec,
                predicted_time: format_seconds(prediction.total_time_sec as f64),
                pace_per_km: prediction.pace_per_km,
                pace_per_mile: prediction.pace_per_mile,
            })
        })
        .collect()
}
