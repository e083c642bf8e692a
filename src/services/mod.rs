// ABOUTME: Domain service layer driving the tracker's training flows
// ABOUTME: Onboarding, workout logging, and next-cycle creation over caller-owned cycles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services sequence the engine's pure operations the way an API layer
//! would. They mutate the `Cycle` values they are handed and never store
//! anything; persisting the result (and serializing concurrent requests for
//! one workout) is the caller's job.

/// Training flows over a lifter's cycles
pub mod training;

pub use training::{SaveOutcome, TrainingService};
