// ABOUTME: Re-exports command modules for wendler-cli
// ABOUTME: Provides planning, cycle file, transition, and configuration commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod config;
pub mod cycle;
pub mod plan;
pub mod transition;
