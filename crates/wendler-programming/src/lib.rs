// ABOUTME: 5/3/1 programming engine - schedules, rounding, generation, status, progression
// ABOUTME: Pure computation over wendler-core records with explicit configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wendler Programming
//!
//! Turns training maxes into prescribed workouts and moves workouts through
//! their lifecycle. No module here performs I/O; callers pass configuration,
//! dates, and timestamps in.

/// Engine configuration (rounding, warm-ups, progression)
pub mod config;
/// Cycle generation and day split validation
pub mod cycle_generator;
/// Cycle-to-cycle training max progression
pub mod progression;
/// Plate rounding
pub mod rounding;
/// Week percentage tables
pub mod schedule;
/// Workout status transitions and completion
pub mod status;
/// Cycle progress summary
pub mod summary;
/// Training max derivation
pub mod training_max;
/// Single workout generation
pub mod workout_generator;

pub use config::{
    ConfigError, ProgramConfig, ProgressionConfig, RoundingConfig, RoundingMode, WarmupConfig,
    WarmupSet,
};
pub use cycle_generator::{validate_cycle, validate_schedule, week_dates, CycleGenerator};
pub use progression::ProgressionEngine;
pub use rounding::round_to_loadable;
pub use schedule::{schedule, week_label, working_sets, SetTemplate};
pub use status::{apply_transition, can_transition, is_movement_complete, is_workout_complete, transition};
pub use summary::{summarize, CycleSummary};
pub use training_max::{training_max_from_one_rep_max, training_maxes_from_one_rep_maxes};
pub use workout_generator::{MovementSets, WorkoutGenerator};

// Generation is deterministic for a given configuration: no clocks, no
// randomness, no environment reads outside `ProgramConfig::load`.
