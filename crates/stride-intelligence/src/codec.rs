// ABOUTME: Duration and pace string codec shared by every engine component
// ABOUTME: Parses H:MM:SS / M:SS / bare seconds and formats HH:MM:SS and M:SS output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Duration/pace codec
//!
//! Two parsing flavors are exposed:
//!
//! - `try_parse_*` return `AppError` with `ErrorCode::InvalidFormat` for
//!   malformed text.
//! - `parse_*` are lenient and return `0` for malformed text. Stored plans
//!   and older API payloads rely on this; callers must treat `0` as
//!   "unparseable" and validate before persisting.

use stride_core::constants::units::{SECONDS_PER_HOUR_U64, SECONDS_PER_MINUTE_U64};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{whole_seconds, DistanceUnit, Performance};
use tracing::debug;

/// Upper bound (exclusive) for minute and second fields
const SEXAGESIMAL_LIMIT: u64 = 60;

/// Strictly parse a duration (`H:MM:SS`, `M:SS` or bare seconds) into seconds
///
/// Fields are read right-to-left as seconds, minutes, hours. In the two- and
/// three-field forms minutes and seconds must be below 60; a single field is
/// raw seconds with no upper bound.
///
/// # Errors
///
/// Returns `AppError::InvalidFormat` if the text is empty, has more than three
/// fields, any field is not a non-negative integer, a minute/second field is
/// 60 or more, or the total overflows.
pub fn try_parse_duration(text: &str) -> AppResult<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_format("Duration is empty"));
    }

    let fields = trimmed
        .split(':')
        .map(parse_field)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(|| malformed(trimmed))?;

    let total = match fields.as_slice() {
        [seconds] => Some(*seconds),
        [minutes, seconds] => {
            check_sexagesimal(trimmed, &[*minutes, *seconds])?;
            Some(minutes * SECONDS_PER_MINUTE_U64 + seconds)
        }
        [hours, minutes, seconds] => {
            check_sexagesimal(trimmed, &[*minutes, *seconds])?;
            hours
                .checked_mul(SECONDS_PER_HOUR_U64)
                .and_then(|h| h.checked_add(minutes * SECONDS_PER_MINUTE_U64 + seconds))
        }
        _ => None,
    };

    total.ok_or_else(|| malformed(trimmed))
}

/// Leniently parse a duration, returning `0` when the text is malformed
#[must_use]
pub fn parse_duration(text: &str) -> u64 {
    try_parse_duration(text).unwrap_or_else(|error| {
        debug!(input = %text, error = %error, "Lenient duration parse fell back to 0");
        0
    })
}

/// Strictly parse a pace (`M:SS` per unit of distance) into seconds
///
/// Pace strings share the duration grammar.
///
/// # Errors
///
/// Same conditions as [`try_parse_duration`].
pub fn try_parse_pace(text: &str) -> AppResult<u64> {
    try_parse_duration(text)
}

/// Leniently parse a pace, returning `0` when the text is malformed
#[must_use]
pub fn parse_pace(text: &str) -> u64 {
    parse_duration(text)
}

/// Format seconds as `HH:MM:SS`
///
/// The total is rounded to a whole second before being split. Hours grow past
/// two digits for efforts of 100 hours or more. Negative or non-finite input
/// renders as `00:00:00`.
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    let hours = total / SECONDS_PER_HOUR_U64;
    let minutes = (total % SECONDS_PER_HOUR_U64) / SECONDS_PER_MINUTE_U64;
    let secs = total % SECONDS_PER_MINUTE_U64;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format seconds per unit as `M:SS` (minutes unpadded)
#[must_use]
pub fn format_pace(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    format!(
        "{}:{:02}",
        total / SECONDS_PER_MINUTE_U64,
        total % SECONDS_PER_MINUTE_U64
    )
}

/// Per-unit pace (`MM:SS`) for a total duration over a distance
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `distance` is not a positive finite
/// number, or `AppError::InvalidFormat` if `duration` cannot be parsed.
pub fn calculate_pace(duration: &str, distance: f64) -> AppResult<String> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance must be positive to derive a pace, got {distance}"
        )));
    }

    let total_seconds = try_parse_duration(duration)?;
    let pace = whole_seconds(total_seconds as f64 / distance);
    Ok(format!(
        "{:02}:{:02}",
        pace / SECONDS_PER_MINUTE_U64,
        pace % SECONDS_PER_MINUTE_U64
    ))
}

/// Total duration (`HH:MM:SS`) for covering `distance` at `pace`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `distance` is negative or not finite,
/// or `AppError::InvalidFormat` if `pace` cannot be parsed.
pub fn calculate_duration_from_pace(distance: f64, pace: &str) -> AppResult<String> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance must be zero or positive, got {distance}"
        )));
    }

    let pace_seconds = try_parse_pace(pace)?;
    Ok(format_seconds(distance * pace_seconds as f64))
}

/// Build a [`Performance`] from the raw fields an API request carries
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for a non-positive distance or a zero
/// duration, and `AppError::InvalidFormat` for an unparseable duration.
pub fn parse_performance(
    distance: f64,
    distance_unit: DistanceUnit,
    duration: &str,
) -> AppResult<Performance> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance must be positive, got {distance}"
        )));
    }

    let duration_seconds = try_parse_duration(duration)?;
    if duration_seconds == 0 {
        return Err(AppError::invalid_input("Duration must be positive"));
    }

    Ok(Performance::new(distance, distance_unit, duration_seconds))
}

fn parse_field(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn check_sexagesimal(input: &str, fields: &[u64]) -> AppResult<()> {
    if fields.iter().any(|&value| value >= SEXAGESIMAL_LIMIT) {
        return Err(AppError::invalid_format(format!(
            "Minutes and seconds must be below 60 in '{input}'"
        ))
        .with_details(serde_json::json!({ "input": input })));
    }
    Ok(())
}

fn malformed(input: &str) -> AppError {
    AppError::invalid_format(format!(
        "Unparseable duration '{input}', expected H:MM:SS, M:SS or seconds"
    ))
    .with_details(serde_json::json!({ "input": input }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::errors::ErrorCode;

    #[test]
    fn test_parse_duration_forms() {
        assert_eq!(parse_duration("1:02:03"), 3723);
        assert_eq!(parse_duration("25:30"), 1530);
        assert_eq!(parse_duration("90"), 90);
        assert_eq!(parse_duration("100000"), 100_000);
        assert_eq!(parse_duration(" 0:45 "), 45);
    }

    #[test]
    fn test_parse_duration_fails_soft() {
        for bad in ["", "   ", "abc", "1:60", "1:75:00", "-5", "1::2", "1:2:3:4", "1.5:00", "5:"] {
            assert_eq!(parse_duration(bad), 0, "input {bad:?}");
            assert_eq!(
                try_parse_duration(bad).unwrap_err().code,
                ErrorCode::InvalidFormat,
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_three_field_hours_are_unbounded() {
        assert_eq!(parse_duration("120:00:00"), 432_000);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "00:00:00");
        assert_eq!(format_seconds(3723.0), "01:02:03");
        assert_eq!(format_seconds(59.6), "00:01:00");
        assert_eq!(format_seconds(360_000.0), "100:00:00");
        assert_eq!(format_seconds(f64::NAN), "00:00:00");
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(330.0), "5:30");
        assert_eq!(format_pace(65.0), "1:05");
        assert_eq!(format_pace(605.9), "10:06");
    }

    #[test]
    fn test_calculate_pace() {
        assert_eq!(calculate_pace("50:00", 10.0).unwrap(), "05:00");
        assert_eq!(calculate_pace("1:45:00", 13.1).unwrap(), "08:01");
        assert_eq!(
            calculate_pace("50:00", 0.0).unwrap_err().code,
            ErrorCode::InvalidInput
        );
        assert_eq!(
            calculate_pace("bogus", 5.0).unwrap_err().code,
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn test_calculate_duration_from_pace() {
        assert_eq!(calculate_duration_from_pace(26.2, "8:00").unwrap(), "03:29:36");
        assert_eq!(calculate_duration_from_pace(0.0, "8:00").unwrap(), "00:00:00");
        assert!(calculate_duration_from_pace(-1.0, "8:00").is_err());
    }

    #[test]
    fn test_parse_performance() {
        let performance = parse_performance(5.0, DistanceUnit::Kilometers, "20:00").unwrap();
        assert_eq!(performance.duration_seconds, 1200);
        assert!(parse_performance(5.0, DistanceUnit::Kilometers, "0").is_err());
        assert!(parse_performance(-5.0, DistanceUnit::Kilometers, "20:00").is_err());
    }
}
