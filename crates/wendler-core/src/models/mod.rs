// ABOUTME: Core data models for the 5/3/1 tracker
// ABOUTME: Movements, units, training maxes, set prescriptions, workouts, and cycles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data records exchanged between the engine and its callers. A
//! [`Cycle`] exclusively owns its [`WorkoutPlan`]s; a lifter (out of scope)
//! owns at most one active cycle and any number of finished ones.

/// The four barbell movements and their categories
pub mod movement;
/// Weight units
pub mod units;
/// Per-movement weight maps (one-rep maxes and training maxes)
pub mod training_max;
/// Prescribed sets and their target reps
pub mod prescription;
/// Workout status enumeration
pub mod status;
/// Workout plans and recorded actuals
pub mod workout;
/// Day split assignment
pub mod schedule;
/// Cycles and their calendar week ranges
pub mod cycle;

pub use cycle::{Cycle, WeekDateRange};
pub use movement::{LiftCategory, Movement};
pub use prescription::{SetPrescription, SetType, TargetReps};
pub use schedule::WorkoutSchedule;
pub use status::WorkoutStatus;
pub use training_max::{OneRepMaxSet, TrainingMaxSet};
pub use units::WeightUnit;
pub use workout::{SetActual, WorkoutPlan};
