// ABOUTME: Workout plan model - one training day of one week in a cycle
// ABOUTME: Holds prescribed sets per movement, status, and the lifter's recorded actuals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Movement, SetPrescription, WorkoutStatus};
use crate::errors::{ProgramError, ProgramResult};

/// What the lifter actually did on one set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetActual {
    /// Weight on the bar, when it differs from the prescription
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_weight: Option<f64>,
    /// Reps performed; `None` until the set is logged
    #[serde(default)]
    pub completed_reps: Option<u32>,
}

impl SetActual {
    /// A set logged with a rep count at the prescribed weight
    #[must_use]
    pub const fn reps(completed_reps: u32) -> Self {
        Self {
            actual_weight: None,
            completed_reps: Some(completed_reps),
        }
    }
}

/// One day's workout: week, day, its two movements, and their sets
///
/// Created in bulk when a cycle starts. Only the status and the actuals
/// change afterwards; the movements and sets are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Week of the cycle, 1-4
    pub week: u8,
    /// Training day within the week, starting at 1
    pub day: u8,
    /// Movements trained this day, in order
    pub movements: Vec<Movement>,
    /// Ordered prescription per movement (warm-ups first)
    pub sets: BTreeMap<Movement, Vec<SetPrescription>>,
    /// Current lifecycle status
    #[serde(default)]
    pub status: WorkoutStatus,
    /// Recorded performance per movement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actuals: Option<BTreeMap<Movement, Vec<SetActual>>>,
    /// When the workout entered `completed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkoutPlan {
    /// Create a not-started workout from generated sets
    #[must_use]
    pub fn new(
        week: u8,
        day: u8,
        movements: Vec<Movement>,
        sets: BTreeMap<Movement, Vec<SetPrescription>>,
    ) -> Self {
        Self {
            week,
            day,
            movements,
            sets,
            status: WorkoutStatus::NotStarted,
            actuals: None,
            completed_at: None,
        }
    }

    /// Whether the movement is trained in this workout
    #[must_use]
    pub fn includes(&self, movement: Movement) -> bool {
        self.movements.contains(&movement)
    }

    /// Prescribed sets of one movement
    #[must_use]
    pub fn sets_for(&self, movement: Movement) -> Option<&[SetPrescription]> {
        self.sets.get(&movement).map(Vec::as_slice)
    }

    /// Recorded actuals of one movement
    #[must_use]
    pub fn actuals_for(&self, movement: Movement) -> Option<&[SetActual]> {
        self.actuals
            .as_ref()
            .and_then(|actuals| actuals.get(&movement))
            .map(Vec::as_slice)
    }

    /// Store the lifter's actuals for one movement, replacing earlier ones
    ///
    /// Does not touch the status: whether the workout is now complete is a
    /// separate decision for the caller.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::UnknownMovement` if the movement is not part of this workout
    pub fn record_actuals(
        &mut self,
        movement: Movement,
        actuals: Vec<SetActual>,
    ) -> ProgramResult<()> {
        if !self.includes(movement) {
            return Err(ProgramError::unknown_movement(movement.as_str()));
        }
        self.actuals
            .get_or_insert_with(BTreeMap::new)
            .insert(movement, actuals);
        Ok(())
    }
}
