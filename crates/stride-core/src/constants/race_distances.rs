// ABOUTME: Standard road race distances used by the race predictor
// ABOUTME: Kilometer values match the distances published by World Athletics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

/// 5K in kilometers
pub const DISTANCE_5K_KM: f64 = 5.0;

/// 10K in kilometers
pub const DISTANCE_10K_KM: f64 = 10.0;

/// Half marathon in kilometers
pub const DISTANCE_HALF_MARATHON_KM: f64 = 21.0975;

/// Marathon in kilometers
pub const DISTANCE_MARATHON_KM: f64 = 42.195;

/// 10K in meters, the reference distance for normalizing performances
pub const DISTANCE_10K_M: f64 = 10_000.0;

/// Named distances predicted by the multi-target race predictor, in order
pub const STANDARD_RACES: [(&str, f64); 4] = [
    ("5K", DISTANCE_5K_KM),
    ("10K", DISTANCE_10K_KM),
    ("Half Marathon", DISTANCE_HALF_MARATHON_KM),
    ("Marathon", DISTANCE_MARATHON_KM),
];
