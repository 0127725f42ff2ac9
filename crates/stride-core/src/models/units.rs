// ABOUTME: Distance unit enumeration with meter conversions
// ABOUTME: Serializes with the lowercase names used by the web API ("miles", "kilometers")
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::constants::units::{METERS_PER_KM, METERS_PER_MILE};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a distance, mileage or pace is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Statute miles (1609.34 m)
    #[default]
    Miles,
    /// Kilometers
    Kilometers,
}

impl DistanceUnit {
    /// Meters in one unit of distance
    #[must_use]
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            Self::Miles => METERS_PER_MILE,
            Self::Kilometers => METERS_PER_KM,
        }
    }

    /// Convert a distance in this unit to meters
    #[must_use]
    pub fn to_meters(self, distance: f64) -> f64 {
        distance * self.meters_per_unit()
    }

    /// Convert a distance in meters to this unit
    #[must_use]
    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    /// Wire name of the unit
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Miles => "miles",
            Self::Kilometers => "kilometers",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "miles" | "mile" | "mi" => Ok(Self::Miles),
            "kilometers" | "kilometer" | "km" => Ok(Self::Kilometers),
            other => Err(AppError::invalid_input(format!(
                "Unknown distance unit: '{other}'. Valid options: miles, kilometers"
            ))),
        }
    }
}
