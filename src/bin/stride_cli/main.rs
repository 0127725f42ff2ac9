// ABOUTME: Stride CLI - command-line front end for the running performance engine
// ABOUTME: Estimates VO2max, predicts race times, derives paces, and reshapes plan files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors
//!
//! Usage:
//! ```bash
//! # VO2max from a 10K in 40:00
//! stride-cli vo2max --distance 10 --unit kilometers --duration 40:00
//!
//! # Predict a half marathon from a 1-hour 10K
//! stride-cli predict --time 1:00:00 --distance-km 10 --target-km 21.0975
//!
//! # Training paces from a 5:30/mile race pace
//! stride-cli training-paces --race-pace 5:30
//!
//! # Periodized mileage for a 10-week plan peaking at 50
//! stride-cli mileage --weeks 10 --peak 50
//!
//! # Reduce a plan to three runs per week with cross training
//! stride-cli customize --plan plan.json --runs-per-week 3 --cross-training
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use helpers::display::OutputFormat;
use std::path::PathBuf;
use stride_coach::{
    config::load_engine_config,
    errors::{AppError, AppResult},
    logging::{AppLogger, LoggingConfig},
};

type Result<T> = AppResult<T>;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride running performance CLI",
    long_about = "Command-line access to the Stride engine: VO2max estimation, race prediction, training paces, and plan shaping."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate VO2max from a race performance
    Vo2max {
        /// Distance covered
        #[arg(long)]
        distance: f64,

        /// Distance unit (miles, kilometers)
        #[arg(long, default_value = "miles")]
        unit: String,

        /// Finishing time (H:MM:SS, M:SS or seconds)
        #[arg(long)]
        duration: String,

        /// Estimation algorithm (daniels, riegel)
        #[arg(long, default_value = "daniels")]
        algorithm: String,
    },

    /// Predict a finishing time at a new distance with Riegel's formula
    Predict {
        /// Known finishing time (H:MM:SS, M:SS or seconds)
        #[arg(long)]
        time: String,

        /// Known distance in kilometers
        #[arg(long)]
        distance_km: f64,

        /// Target distance in kilometers (all standard races when omitted)
        #[arg(long)]
        target_km: Option<f64>,

        /// Fatigue exponent override (defaults to STRIDE_RIEGEL_EXPONENT or 1.06)
        #[arg(long)]
        exponent: Option<f64>,
    },

    /// Predict 5K, 10K, half marathon and marathon results
    RacePaces {
        /// Known finishing time in minutes
        #[arg(long)]
        time_minutes: f64,

        /// Known distance in kilometers
        #[arg(long)]
        distance_km: f64,
    },

    /// Derive training paces from a race pace
    TrainingPaces {
        /// Race pace (M:SS per unit)
        #[arg(long)]
        race_pace: String,

        /// Pace unit (miles, kilometers)
        #[arg(long, default_value = "miles")]
        unit: String,
    },

    /// Print the periodized weekly mileage schedule
    Mileage {
        /// Plan length in weeks
        #[arg(long)]
        weeks: u32,

        /// Peak weekly mileage
        #[arg(long)]
        peak: f64,
    },

    /// Re-select run types in a plan file for a target runs per week
    Customize {
        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Runs per week, 3 to 5 (defaults to STRIDE_RUNS_PER_WEEK or 4)
        #[arg(long)]
        runs_per_week: Option<u8>,

        /// Pad short weeks with cross training
        #[arg(long)]
        cross_training: bool,

        /// Write the result to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Apply periodized mileage targets to a plan file
    Periodize {
        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Peak weekly mileage
        #[arg(long)]
        peak: f64,

        /// Write the result to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = load_engine_config()?;
    debug!(?config, "Stride CLI starting");

    let format = cli.format;
    let command = cli.command.name();
    let result = match cli.command {
        Command::Vo2max {
            distance,
            unit,
            duration,
            algorithm,
        } => commands::performance::vo2max(
            format,
            distance,
            &unit,
            &duration,
            &algorithm,
            config.prediction.riegel_exponent,
        ),
        Command::Predict {
            time,
            distance_km,
            target_km,
            exponent,
        } => commands::performance::predict(
            format,
            &time,
            distance_km,
            target_km,
            exponent.unwrap_or(config.prediction.riegel_exponent),
        ),
        Command::RacePaces {
            time_minutes,
            distance_km,
        } => commands::performance::race_paces(
            format,
            time_minutes,
            distance_km,
            config.prediction.riegel_exponent,
        ),
        Command::TrainingPaces { race_pace, unit } => {
            commands::performance::training_paces(format, &race_pace, &unit)
        }
        Command::Mileage { weeks, peak } => commands::plan::mileage(format, weeks, peak),
        Command::Customize {
            plan,
            runs_per_week,
            cross_training,
            output,
        } => {
            let defaults = config.plan;
            commands::plan::customize(
                format,
                &plan,
                runs_per_week.unwrap_or(defaults.default_runs_per_week),
                cross_training || defaults.include_cross_training,
                output.as_deref(),
            )
        }
        Command::Periodize { plan, peak, output } => {
            commands::plan::periodize(format, &plan, peak, output.as_deref())
        }
    };

    if let Err(error) = &result {
        if error.code.http_status() == 400 {
            AppLogger::log_rejected_input(command, &error.message);
        }
    }
    result
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Vo2max { .. } => "vo2max",
            Self::Predict { .. } => "predict",
            Self::RacePaces { .. } => "race-paces",
            Self::TrainingPaces { .. } => "training-paces",
            Self::Mileage { .. } => "mileage",
            Self::Customize { .. } => "customize",
            Self::Periodize { .. } => "periodize",
        }
    }
}
