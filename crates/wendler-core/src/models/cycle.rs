// ABOUTME: Cycle model - four weeks of workouts built from one set of training maxes
// ABOUTME: Owns its workouts and the calendar range of each week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use super::{TrainingMaxSet, WorkoutPlan, WorkoutSchedule};

/// Calendar dates a cycle week spans, inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDateRange {
    /// Week of the cycle, 1-4
    pub week: u8,
    /// First day of the week
    pub start_date: NaiveDate,
    /// Last day of the week (start + 6 days)
    pub end_date: NaiveDate,
    /// Short label of the first day, e.g. "Jan 06"
    pub start_label: String,
    /// Short label of the last day
    pub end_label: String,
}

/// One complete four-week iteration of the program
///
/// The workout list is fixed in count and movement assignment at creation.
/// Only the persistence layer decides which cycle of a lifter is active;
/// this record just carries the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    /// Sequence number per lifter, starting at 1
    pub cycle_number: NonZeroU32,
    /// First day of week 1
    pub start_date: NaiveDate,
    /// Training maxes every prescription of the cycle derives from
    pub training_maxes: TrainingMaxSet,
    /// Day split the workouts were built from
    pub schedule: WorkoutSchedule,
    /// Whether this is the lifter's current cycle
    pub is_active: bool,
    /// Workouts ordered by week, then day
    pub workouts: Vec<WorkoutPlan>,
    /// Calendar range of each week, for display
    pub week_dates: Vec<WeekDateRange>,
}

impl Cycle {
    /// Workout of a given week and day
    #[must_use]
    pub fn workout(&self, week: u8, day: u8) -> Option<&WorkoutPlan> {
        self.workouts
            .iter()
            .find(|workout| workout.week == week && workout.day == day)
    }

    /// Mutable workout of a given week and day
    pub fn workout_mut(&mut self, week: u8, day: u8) -> Option<&mut WorkoutPlan> {
        self.workouts
            .iter_mut()
            .find(|workout| workout.week == week && workout.day == day)
    }

    /// Workouts of one week, in day order
    pub fn week_workouts(&self, week: u8) -> impl Iterator<Item = &WorkoutPlan> + '_ {
        self.workouts
            .iter()
            .filter(move |workout| workout.week == week)
    }

    /// Whether every workout is completed, DNF, or skipped
    #[must_use]
    pub fn all_workouts_terminal(&self) -> bool {
        self.workouts
            .iter()
            .all(|workout| workout.status.is_terminal())
    }

    /// First workout still open, in week/day order
    #[must_use]
    pub fn first_open_workout(&self) -> Option<&WorkoutPlan> {
        self.workouts
            .iter()
            .find(|workout| !workout.status.is_terminal())
    }

    /// Calendar range of one week
    #[must_use]
    pub fn week_range(&self, week: u8) -> Option<&WeekDateRange> {
        self.week_dates.iter().find(|range| range.week == week)
    }
}
