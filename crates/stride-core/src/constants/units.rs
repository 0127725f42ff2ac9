// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.34;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per minute, integer form for duration arithmetic
pub const SECONDS_PER_MINUTE_U64: u64 = 60;

/// Seconds per hour, integer form for duration arithmetic
pub const SECONDS_PER_HOUR_U64: u64 = 3600;
