// ABOUTME: Re-exports command modules for stride-cli
// ABOUTME: Performance estimation commands and plan file commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

pub mod performance;
pub mod plan;
