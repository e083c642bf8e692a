// ABOUTME: Core types and constants for the Wendler 5/3/1 training tracker
// ABOUTME: Foundation crate with error handling, domain models, and program constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wendler Core
//!
//! Foundation crate providing the shared data records of the 5/3/1 tracker.
//! Everything here is plain data: the programming engine in
//! `wendler-programming` consumes and produces these records, and the
//! application crate persists or prints them.
//!
//! ## Modules
//!
//! - **errors**: `ProgramError`, the six validation failures of the engine, with stable `ErrorCode`s
//! - **constants**: Program defaults (training max percentage, increments, cycle shape)
//! - **models**: Movements, units, training maxes, prescriptions, workouts, cycles

/// Validation errors and error codes shared by every crate in the workspace
pub mod errors;

/// Program constants organized by domain
pub mod constants;

/// Core data models (Movement, TrainingMaxSet, WorkoutPlan, Cycle, ...)
pub mod models;

pub use errors::{ErrorCode, ErrorResponse, ParseValueError, ProgramError, ProgramResult};
