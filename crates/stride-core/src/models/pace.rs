// ABOUTME: Pace and performance value types
// ABOUTME: A pace is seconds per unit of distance; a performance is distance plus elapsed time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use super::DistanceUnit;
use crate::constants::units::SECONDS_PER_MINUTE_U64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round a fractional second count to a whole, non-negative second count
///
/// Non-finite and negative values collapse to zero so that `NaN` or
/// `Infinity` can never leak into formatted output.
#[must_use]
pub fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    }
}

/// Time needed to cover one unit of distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pace {
    /// Seconds per one `unit` of distance
    pub seconds: f64,
    /// Distance unit the pace refers to
    pub unit: DistanceUnit,
}

impl Pace {
    /// Create a pace, clamping negative values to zero
    #[must_use]
    pub fn new(seconds: f64, unit: DistanceUnit) -> Self {
        Self {
            seconds: seconds.max(0.0),
            unit,
        }
    }

    /// Pace rounded to whole seconds
    #[must_use]
    pub fn whole_seconds(&self) -> u64 {
        whole_seconds(self.seconds)
    }

    /// Express the same speed per a different unit of distance
    #[must_use]
    pub fn converted_to(&self, unit: DistanceUnit) -> Self {
        if unit == self.unit {
            return *self;
        }
        let per_meter = self.seconds / self.unit.meters_per_unit();
        Self::new(per_meter * unit.meters_per_unit(), unit)
    }
}

/// Renders as `M:SS` (minutes unpadded, seconds zero-padded)
impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.whole_seconds();
        write!(
            f,
            "{}:{:02}",
            total / SECONDS_PER_MINUTE_U64,
            total % SECONDS_PER_MINUTE_U64
        )
    }
}

/// A completed or target effort: a distance covered in a given time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Distance in `distance_unit`
    pub distance: f64,
    /// Unit of `distance`
    pub distance_unit: DistanceUnit,
    /// Elapsed time in whole seconds
    pub duration_seconds: u64,
}

impl Performance {
    /// Create a performance record
    #[must_use]
    pub const fn new(distance: f64, distance_unit: DistanceUnit, duration_seconds: u64) -> Self {
        Self {
            distance,
            distance_unit,
            duration_seconds,
        }
    }

    /// Distance converted to meters
    #[must_use]
    pub fn distance_meters(&self) -> f64 {
        self.distance_unit.to_meters(self.distance)
    }

    /// Elapsed time as a float, for formula input
    #[must_use]
    pub fn time_seconds(&self) -> f64 {
        self.duration_seconds as f64
    }

    /// Average pace in the performance's own unit, `None` for a zero distance
    #[must_use]
    pub fn average_pace(&self) -> Option<Pace> {
        (self.distance > 0.0).then(|| {
            Pace::new(self.time_seconds() / self.distance, self.distance_unit)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_display() {
        assert_eq!(Pace::new(330.0, DistanceUnit::Miles).to_string(), "5:30");
        assert_eq!(Pace::new(59.6, DistanceUnit::Miles).to_string(), "1:00");
        assert_eq!(Pace::new(-5.0, DistanceUnit::Miles).to_string(), "0:00");
    }

    #[test]
    fn test_pace_conversion_between_units() {
        let per_km = Pace::new(300.0, DistanceUnit::Kilometers);
        let per_mile = per_km.converted_to(DistanceUnit::Miles);
        assert_eq!(per_mile.whole_seconds(), 483);
        assert_eq!(per_mile.converted_to(DistanceUnit::Kilometers).whole_seconds(), 300);
    }

    #[test]
    fn test_whole_seconds_rejects_non_finite() {
        assert_eq!(whole_seconds(f64::NAN), 0);
        assert_eq!(whole_seconds(f64::INFINITY), 0);
        assert_eq!(whole_seconds(412.5), 413);
    }

    #[test]
    fn test_performance_average_pace() {
        let run = Performance::new(10.0, DistanceUnit::Kilometers, 3000);
        assert!((run.distance_meters() - 10_000.0).abs() < f64::EPSILON);
        assert_eq!(run.average_pace().unwrap().to_string(), "5:00");
        assert!(Performance::new(0.0, DistanceUnit::Miles, 60)
            .average_pace()
            .is_none());
    }
}
