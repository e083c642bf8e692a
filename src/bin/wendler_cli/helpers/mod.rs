// ABOUTME: Re-exports helper modules for wendler-cli
// ABOUTME: Provides cycle file access and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod files;
