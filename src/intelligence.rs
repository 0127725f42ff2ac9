// ABOUTME: Intelligence module re-exports from the stride-intelligence crate
// ABOUTME: Preserves `stride_coach::intelligence::*` import paths for binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! # Intelligence Module
//!
//! Running-performance math and plan shaping, delegated to the
//! `stride-intelligence` crate.

pub use stride_intelligence::*;
