// ABOUTME: Engine-wide constants organized by domain
// ABOUTME: Unit conversion factors and standard race distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

/// Unit conversion constants
pub mod units;

/// Standard race distances
pub mod race_distances;
