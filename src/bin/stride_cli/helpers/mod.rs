// ABOUTME: Helper modules for stride-cli
// ABOUTME: Output formatting shared by every command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

pub mod display;
