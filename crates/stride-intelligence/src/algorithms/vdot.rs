// ABOUTME: VO2max/VDOT estimation with the Jack Daniels formulas and its inverse
// ABOUTME: Estimates fitness from a race and solves for the time a given VDOT predicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use super::riegel::riegel_time_seconds;
use crate::physiological_constants::daniels::{
    PERCENT_MAX_BASE, PERCENT_MAX_FAST_AMPLITUDE, PERCENT_MAX_FAST_RATE,
    PERCENT_MAX_SLOW_AMPLITUDE, PERCENT_MAX_SLOW_RATE, SOLVER_ITERATIONS, SOLVER_MAX_VELOCITY,
    SOLVER_MIN_VELOCITY, VO2_INTERCEPT, VO2_LINEAR, VO2_QUADRATIC,
};
use crate::physiological_constants::riegel::DEFAULT_FATIGUE_FACTOR;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use stride_core::constants::race_distances::DISTANCE_10K_M;
use stride_core::constants::units::SECONDS_PER_MINUTE;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{DistanceUnit, Pace, Performance};

/// VDOT calculation algorithm selection
///
/// - `Daniels`: Jack Daniels' formula applied directly to the performance
/// - `Riegel`: normalize the performance to a 10K with Riegel's power law,
///   then apply Daniels
///
/// # Scientific References
///
/// - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
/// - Riegel, P.S. (1981). "Athletic records and human endurance." *American Scientist*, 69(3), 285-290.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VdotAlgorithm {
    /// Jack Daniels' VDOT formula
    ///
    /// VO2 = -4.60 + 0.182258 x v + 0.000104 x v², divided by the fraction of
    /// VO2max sustainable for the race duration
    #[default]
    Daniels,

    /// Riegel-normalized Daniels
    Riegel {
        /// Exponent for power-law (default 1.06, can vary by athlete: 1.03-1.08)
        exponent: f64,
    },
}

impl VdotAlgorithm {
    /// Calculate VDOT from race performance
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if time or distance is non-positive,
    /// or if the Riegel exponent is not positive.
    pub fn calculate_vdot(&self, distance_meters: f64, time_seconds: f64) -> AppResult<f64> {
        match self {
            Self::Daniels => calculate_vo2max_jack_daniels(distance_meters, time_seconds),
            Self::Riegel { exponent } => {
                let time_10k =
                    riegel_time_seconds(time_seconds, distance_meters, DISTANCE_10K_M, *exponent)?;
                calculate_vo2max_jack_daniels(DISTANCE_10K_M, time_10k)
            }
        }
    }

    /// Calculate VDOT from a [`Performance`]
    ///
    /// # Errors
    ///
    /// Same conditions as [`VdotAlgorithm::calculate_vdot`].
    pub fn calculate_vdot_for(&self, performance: &Performance) -> AppResult<f64> {
        self.calculate_vdot(performance.distance_meters(), performance.time_seconds())
    }

    /// Predict race time in seconds for target distance given VDOT
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for non-positive inputs and
    /// `AppError::ValueOutOfRange` if no realistic time matches the VDOT.
    pub fn predict_time(&self, vdot: f64, target_distance_meters: f64) -> AppResult<f64> {
        match self {
            Self::Daniels => predict_time_from_vdot(vdot, target_distance_meters),
            Self::Riegel { exponent } => {
                let time_10k = predict_time_from_vdot(vdot, DISTANCE_10K_M)?;
                riegel_time_seconds(time_10k, DISTANCE_10K_M, target_distance_meters, *exponent)
            }
        }
    }

    /// Get algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Daniels => "daniels",
            Self::Riegel { .. } => "riegel",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Daniels => "VDOT = (-4.60 + 0.182258v + 0.000104v²) / %VO2max(t)",
            Self::Riegel { .. } => "T10K = T1 x (10000/D1)^exponent, then Daniels",
        }
    }
}

impl FromStr for VdotAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daniels" => Ok(Self::Daniels),
            "riegel" => Ok(Self::Riegel {
                exponent: DEFAULT_FATIGUE_FACTOR,
            }),
            other => Err(AppError::invalid_input(format!(
                "Unknown VDOT algorithm: '{other}'. Valid options: daniels, riegel"
            ))),
        }
    }
}

/// Estimate VO2max (mL/kg/min) from a race performance with Jack Daniels' formula
///
/// 1. `t = time / 60`, `v = distance / t` (m/min)
/// 2. `vo2 = -4.6 + 0.182258 v + 0.000104 v²`
/// 3. `pct = 0.8 + 0.1894393 e^(-0.012778 t) + 0.2989558 e^(-0.1932605 t)`
/// 4. result `vo2 / pct`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` naming the value if distance or time is
/// not a positive finite number.
pub fn calculate_vo2max_jack_daniels(distance_meters: f64, time_seconds: f64) -> AppResult<f64> {
    ensure_positive("Distance", distance_meters)?;
    ensure_positive("Time", time_seconds)?;
    Ok(daniels_vdot(distance_meters, time_seconds / SECONDS_PER_MINUTE))
}

/// Predict the time in seconds a runner of `vdot` needs for `distance_meters`
///
/// Inverts [`calculate_vo2max_jack_daniels`] by bisection. For a fixed
/// distance the estimate falls strictly as time grows, so the bracket of
/// velocities 50-1000 m/min contains exactly one solution when one exists.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for a non-positive VDOT or distance, and
/// `AppError::ValueOutOfRange` when the VDOT needs a velocity outside the bracket.
pub fn predict_time_from_vdot(vdot: f64, distance_meters: f64) -> AppResult<f64> {
    ensure_positive("VDOT", vdot)?;
    ensure_positive("Distance", distance_meters)?;

    let mut fast_minutes = distance_meters / SOLVER_MAX_VELOCITY;
    let mut slow_minutes = distance_meters / SOLVER_MIN_VELOCITY;

    let fastest = daniels_vdot(distance_meters, fast_minutes);
    let slowest = daniels_vdot(distance_meters, slow_minutes);
    if !(slowest..=fastest).contains(&vdot) {
        return Err(AppError::value_out_of_range(format!(
            "VDOT {vdot:.1} is outside the solvable range ({slowest:.1}-{fastest:.1}) for {distance_meters} m"
        )));
    }

    for _ in 0..SOLVER_ITERATIONS {
        let mid = (fast_minutes + slow_minutes) / 2.0;
        if daniels_vdot(distance_meters, mid) > vdot {
            fast_minutes = mid;
        } else {
            slow_minutes = mid;
        }
    }

    Ok((fast_minutes + slow_minutes) / 2.0 * SECONDS_PER_MINUTE)
}

/// Predict race pace per `unit` for `distance_meters` at a given VDOT
///
/// # Errors
///
/// Same conditions as [`predict_time_from_vdot`].
pub fn predict_pace_from_vdot(
    vdot: f64,
    distance_meters: f64,
    unit: DistanceUnit,
) -> AppResult<Pace> {
    let time_seconds = predict_time_from_vdot(vdot, distance_meters)?;
    Ok(Pace::new(time_seconds / unit.from_meters(distance_meters), unit))
}

fn daniels_vdot(distance_meters: f64, time_minutes: f64) -> f64 {
    let velocity = distance_meters / time_minutes;
    let vo2 = (VO2_QUADRATIC * velocity).mul_add(velocity, VO2_LINEAR.mul_add(velocity, VO2_INTERCEPT));
    vo2 / percent_max(time_minutes)
}

/// Fraction of VO2max sustainable for an effort lasting `time_minutes`
fn percent_max(time_minutes: f64) -> f64 {
    PERCENT_MAX_FAST_AMPLITUDE.mul_add(
        (PERCENT_MAX_FAST_RATE * time_minutes).exp(),
        PERCENT_MAX_SLOW_AMPLITUDE.mul_add((PERCENT_MAX_SLOW_RATE * time_minutes).exp(), PERCENT_MAX_BASE),
    )
}

fn ensure_positive(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!("{name} must be positive, got {value}"))
            .with_details(serde_json::json!({ "field": name.to_lowercase(), "value": value.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::errors::ErrorCode;

    #[test]
    fn test_percent_max_decays_toward_base() {
        assert!(percent_max(1.0) > percent_max(30.0));
        assert!((percent_max(10_000.0) - PERCENT_MAX_BASE).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_preconditions_name_the_value() {
        let error = calculate_vo2max_jack_daniels(0.0, 1200.0).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.message.starts_with("Distance"));

        let error = calculate_vo2max_jack_daniels(5000.0, -1.0).unwrap_err();
        assert!(error.message.starts_with("Time"));
    }

    #[test]
    fn test_inverse_rejects_unsolvable_vdot() {
        let error = predict_time_from_vdot(500.0, 5_000.0).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Daniels".parse::<VdotAlgorithm>().unwrap(), VdotAlgorithm::Daniels);
        assert_eq!(
            "riegel".parse::<VdotAlgorithm>().unwrap().name(),
            "riegel"
        );
        assert!("hybrid".parse::<VdotAlgorithm>().is_err());
    }
}
