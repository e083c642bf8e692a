// ABOUTME: Main library entry point for the Wendler 5/3/1 training tracker
// ABOUTME: Application layer over the core records and the programming engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wendler Tracker
//!
//! Plans and tracks Wendler 5/3/1 training cycles: four-week blocks of
//! percentage-based barbell work on squat, bench press, deadlift, and
//! overhead press.
//!
//! ## Architecture
//!
//! - **`wendler-core`**: data records, error kinds, constants
//! - **`wendler-programming`**: the pure generation engine
//! - **services**: onboarding, workout logging, and next-cycle flows over caller-owned cycles
//! - **config / logging**: environment configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use wendler_tracker::models::{Movement, OneRepMaxSet, WeightUnit};
//! use wendler_tracker::services::TrainingService;
//!
//! fn main() -> anyhow::Result<()> {
//!     let service = TrainingService::from_env()?;
//!     let one_rep_maxes = OneRepMaxSet::new(WeightUnit::Pounds, 335.0, 225.0, 405.0, 155.0)?;
//!     let cycle = service.onboard(
//!         &one_rep_maxes,
//!         &[Movement::Squat, Movement::Bench],
//!         &[Movement::Deadlift, Movement::OverheadPress],
//!         NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default(),
//!     )?;
//!     println!("{} workouts planned", cycle.workouts.len());
//!     Ok(())
//! }
//! ```

/// Application configuration (engine settings plus logging)
pub mod config;

/// Structured logging setup
pub mod logging;

/// Training flows: onboarding, logging workouts, starting the next cycle
pub mod services;

pub use wendler_core::{constants, errors, models};
pub use wendler_programming as programming;
