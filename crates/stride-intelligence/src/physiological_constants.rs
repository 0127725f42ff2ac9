// ABOUTME: Exact domain constants for running physiology and plan periodization
// ABOUTME: Daniels VO2 coefficients, Riegel exponent, training-pace multipliers, phase fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Physiological constants based on published running research
//!
//! These values are reproduced exactly from their sources. Stored plans and
//! test fixtures depend on them bit-for-bit, so they are not configuration.

/// Jack Daniels / Jimmy Gilbert oxygen cost and drop-dead formulas
///
/// References:
/// - Daniels, J. & Gilbert, J. (1979). Oxygen Power: Performance Tables for Distance Runners
/// - Daniels, J. (2013). Daniels' Running Formula (3rd ed.). Human Kinetics.
pub mod daniels {
    /// Constant term of the oxygen cost of running (mL/kg/min)
    pub const VO2_INTERCEPT: f64 = -4.6;

    /// Linear velocity coefficient (velocity in m/min)
    pub const VO2_LINEAR: f64 = 0.182_258;

    /// Quadratic velocity coefficient
    pub const VO2_QUADRATIC: f64 = 0.000_104;

    /// Asymptotic fraction of VO2max sustainable for very long efforts
    pub const PERCENT_MAX_BASE: f64 = 0.8;

    /// Amplitude of the slow fractional-utilization decay
    pub const PERCENT_MAX_SLOW_AMPLITUDE: f64 = 0.189_439_3;

    /// Rate of the slow decay (per minute)
    pub const PERCENT_MAX_SLOW_RATE: f64 = -0.012_778;

    /// Amplitude of the fast fractional-utilization decay
    pub const PERCENT_MAX_FAST_AMPLITUDE: f64 = 0.298_955_8;

    /// Rate of the fast decay (per minute)
    pub const PERCENT_MAX_FAST_RATE: f64 = -0.193_260_5;

    /// Slowest velocity the inverse solver searches (m/min, ~32 min/km)
    pub const SOLVER_MIN_VELOCITY: f64 = 50.0;

    /// Fastest velocity the inverse solver searches (m/min, 1:00 min/km)
    pub const SOLVER_MAX_VELOCITY: f64 = 1000.0;

    /// Bisection iterations; halves the bracket well below a millisecond
    pub const SOLVER_ITERATIONS: u32 = 100;
}

/// Riegel power-law race prediction
///
/// Reference: Riegel, P.S. (1981). "Athletic records and human endurance."
/// *American Scientist*, 69(3), 285-290.
pub mod riegel {
    /// Default fatigue exponent for running
    pub const DEFAULT_FATIGUE_FACTOR: f64 = 1.06;
}

/// Training pace multipliers applied to race pace (seconds per unit)
pub mod training_pace_multipliers {
    /// Easy runs
    pub const EASY: f64 = 1.25;
    /// Marathon-pace runs
    pub const MARATHON: f64 = 1.05;
    /// Threshold (tempo) runs
    pub const THRESHOLD: f64 = 0.95;
    /// Interval repeats
    pub const INTERVAL: f64 = 0.90;
    /// Race pace itself
    pub const RACE: f64 = 1.00;
    /// Derived paces are published to the nearest quarter minute
    pub const ROUNDING_SECONDS: f64 = 15.0;
}

/// Four-phase periodization of weekly mileage
pub mod periodization {
    /// Share of the plan spent in the base phase
    pub const BASE_FRACTION: f64 = 0.4;
    /// Share of the plan spent in the build phase
    pub const BUILD_FRACTION: f64 = 0.3;
    /// Share of the plan spent at peak mileage
    pub const PEAK_FRACTION: f64 = 0.2;

    /// Base phase starts at this share of peak mileage
    pub const BASE_START: f64 = 0.5;
    /// Base and build phases each climb by this share of peak
    pub const RAMP: f64 = 0.2;
    /// Build phase starts at this share of peak mileage
    pub const BUILD_START: f64 = 0.7;
    /// Taper starts at this share of peak mileage
    pub const TAPER_START: f64 = 0.8;
    /// Taper sheds this share of peak by race week
    pub const TAPER_DROP: f64 = 0.3;
}

/// Weekly session count bounds for plan customization
pub mod runs_per_week {
    /// Fewest sessions a customized week may target
    pub const MIN: u8 = 3;
    /// Most sessions a customized week may target
    pub const MAX: u8 = 5;
    /// Session count at which a second easy run is kept
    pub const SECOND_EASY_THRESHOLD: u8 = 4;
}
