// ABOUTME: Error module re-exports from the stride-core crate
// ABOUTME: Keeps `stride_coach::errors::AppError` paths stable for binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

pub use stride_core::errors::*;
