// ABOUTME: Model re-exports from the stride-core crate
// ABOUTME: Distance units, paces, performances, and plan records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

pub use stride_core::models::*;
