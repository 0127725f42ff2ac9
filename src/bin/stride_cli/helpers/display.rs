// ABOUTME: Output formatting helpers for stride-cli
// ABOUTME: Renders command results as JSON or as aligned text for terminals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;
use stride_coach::{errors::AppResult, models::RunningPlanData, plan_io};

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, camelCase fields as the web client sees them
    Json,
    /// Human-readable text
    Pretty,
}

/// A command result that can be shown in either output format
pub trait Report: Serialize {
    /// Text rendering for terminals
    fn render(&self) -> String;
}

/// Print a report in the requested format
pub fn emit<T: Report>(format: OutputFormat, report: &T) -> AppResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Pretty => println!("{}", report.render()),
    }
    Ok(())
}

/// Write a transformed plan to `output`, or print it when no file is given
pub fn emit_plan(
    format: OutputFormat,
    plan: &RunningPlanData,
    output: Option<&Path>,
) -> AppResult<()> {
    if let Some(path) = output {
        plan_io::save_plan(path, plan)?;
        println!("Plan written to {}", path.display());
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", plan_io::plan_to_json(plan)?),
        OutputFormat::Pretty => println!("{}", render_plan(plan)),
    }
    Ok(())
}

fn render_plan(plan: &RunningPlanData) -> String {
    let mut lines = vec![format!("{}-week plan", plan.weeks), "=".repeat(60)];
    for week in &plan.schedule {
        lines.push(format!(
            "Week {:>2}  {:>6.1} {}",
            week.week_number, week.weekly_mileage, week.unit
        ));
        for run in &week.runs {
            let pace = if run.target_pace.is_empty() {
                String::new()
            } else {
                format!(" @ {}", run.target_pace)
            };
            lines.push(format!(
                "   {:<10} {:>5.1}{pace}{}",
                run.run_type.as_str(),
                run.mileage,
                run.day
                    .as_deref()
                    .map_or_else(String::new, |day| format!("  ({day})"))
            ));
        }
    }
    lines.join("\n")
}
