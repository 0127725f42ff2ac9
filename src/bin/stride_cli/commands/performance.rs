// ABOUTME: Performance commands for stride-cli
// ABOUTME: VO2max estimation, Riegel prediction, standard race table, and training paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::helpers::display::{emit, OutputFormat, Report};
use serde::Serialize;
use stride_coach::{
    constants::units::METERS_PER_KM,
    errors::AppResult,
    intelligence::{
        calculate_race_paces_with_exponent, format_seconds, get_paces_from_race_pace_in,
        parse_performance, riegel, try_parse_duration, try_parse_pace, RacePrediction,
        RiegelPrediction, TrainingPaceTable, VdotAlgorithm,
    },
    models::DistanceUnit,
};

type Result<T> = AppResult<T>;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Vo2MaxReport {
    vo2max: f64,
    algorithm: &'static str,
    formula: &'static str,
    average_pace: Option<String>,
    unit: DistanceUnit,
}

impl Report for Vo2MaxReport {
    fn render(&self) -> String {
        let pace = self
            .average_pace
            .as_deref()
            .map_or_else(String::new, |pace| format!("\nAverage pace: {pace} per {}", self.unit));
        format!(
            "VO2max: {:.1} mL/kg/min ({})\nFormula: {}{pace}",
            self.vo2max, self.algorithm, self.formula
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictionReport {
    target_km: f64,
    exponent: f64,
    predicted_time: String,
    #[serde(flatten)]
    prediction: RiegelPrediction,
}

impl Report for PredictionReport {
    fn render(&self) -> String {
        format!(
            "{} km in {} ({} s)\nPace: {}/km, {}/mile (exponent {})",
            self.target_km,
            self.predicted_time,
            self.prediction.total_time_sec,
            self.prediction.pace_per_km,
            self.prediction.pace_per_mile,
            self.exponent
        )
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct RaceTable(Vec<RacePrediction>);

impl Report for RaceTable {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{:<15} {:>9} {:>8} {:>8}", "Race", "Time", "/km", "/mile"),
            "-".repeat(43),
        ];
        lines.extend(self.0.iter().map(|race| {
            format!(
                "{:<15} {:>9} {:>8} {:>8}",
                race.name, race.predicted_time, race.pace_per_km, race.pace_per_mile
            )
        }));
        lines.join("\n")
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaceReport {
    unit: DistanceUnit,
    #[serde(flatten)]
    paces: TrainingPaceTable,
    equivalent_unit: DistanceUnit,
    equivalent: TrainingPaceTable,
}

impl Report for PaceReport {
    fn render(&self) -> String {
        let (unit, other) = (self.unit, self.equivalent_unit);
        [
            ("Easy", &self.paces.easy, &self.equivalent.easy),
            ("Marathon", &self.paces.marathon, &self.equivalent.marathon),
            ("Threshold", &self.paces.threshold, &self.equivalent.threshold),
            ("Interval", &self.paces.interval, &self.equivalent.interval),
            ("Race", &self.paces.race, &self.equivalent.race),
        ]
        .iter()
        .map(|(name, pace, converted)| {
            format!("{name:<10} {pace:>6} /{unit}   {converted:>6} /{other}")
        })
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Estimate VO2max from a performance
pub fn vo2max(
    format: OutputFormat,
    distance: f64,
    unit: &str,
    duration: &str,
    algorithm: &str,
    riegel_exponent: f64,
) -> Result<()> {
    let unit: DistanceUnit = unit.parse()?;
    let algorithm = match algorithm.parse::<VdotAlgorithm>()? {
        VdotAlgorithm::Riegel { .. } => VdotAlgorithm::Riegel {
            exponent: riegel_exponent,
        },
        daniels @ VdotAlgorithm::Daniels => daniels,
    };
    let performance = parse_performance(distance, unit, duration)?;
    let vo2max = algorithm.calculate_vdot_for(&performance)?;

    info!(vo2max, algorithm = algorithm.name(), "Estimated VO2max");

    emit(
        format,
        &Vo2MaxReport {
            vo2max,
            algorithm: algorithm.name(),
            formula: algorithm.formula(),
            average_pace: performance.average_pace().map(|pace| pace.to_string()),
            unit,
        },
    )
}

/// Predict one target distance, or the standard race table when no target is given
pub fn predict(
    format: OutputFormat,
    time: &str,
    distance_km: f64,
    target_km: Option<f64>,
    exponent: f64,
) -> Result<()> {
    let time_seconds = try_parse_duration(time)? as f64;

    let Some(target_km) = target_km else {
        return race_paces(format, time_seconds / 60.0, distance_km, exponent);
    };

    let prediction = riegel(
        time_seconds,
        distance_km * METERS_PER_KM,
        target_km * METERS_PER_KM,
        exponent,
    )?;

    emit(
        format,
        &PredictionReport {
            target_km,
            exponent,
            predicted_time: format_seconds(prediction.total_time_sec as f64),
            prediction,
        },
    )
}

/// Predict the four standard race distances
pub fn race_paces(
    format: OutputFormat,
    time_minutes: f64,
    distance_km: f64,
    exponent: f64,
) -> Result<()> {
    let races = calculate_race_paces_with_exponent(time_minutes, distance_km, exponent)?;
    emit(format, &RaceTable(races))
}

/// Derive the training pace table from a race pace
pub fn training_paces(format: OutputFormat, race_pace: &str, unit: &str) -> Result<()> {
    let unit: DistanceUnit = unit.parse()?;
    let seconds = try_parse_pace(race_pace)? as f64;
    let paces = get_paces_from_race_pace_in(unit, seconds);
    let equivalent_unit = match unit {
        DistanceUnit::Miles => DistanceUnit::Kilometers,
        DistanceUnit::Kilometers => DistanceUnit::Miles,
    };

    emit(
        format,
        &PaceReport {
            unit,
            paces: paces.to_table(),
            equivalent_unit,
            equivalent: paces.converted_to(equivalent_unit).to_table(),
        },
    )
}
