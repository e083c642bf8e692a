// ABOUTME: Training service - onboarding, starting and saving workouts, next cycle creation
// ABOUTME: Sequences generation, status transitions, completion checks, and progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use wendler_core::constants::cycle::{DAYS_PER_WEEK, FIRST_CYCLE_NUMBER};
use wendler_core::models::{Cycle, Movement, OneRepMaxSet, SetActual, WorkoutPlan, WorkoutStatus};
use wendler_core::{ProgramError, ProgramResult};
use wendler_programming::config::{ConfigError, ProgramConfig};
use wendler_programming::cycle_generator::CycleGenerator;
use wendler_programming::progression::ProgressionEngine;
use wendler_programming::schedule::validate_week;
use wendler_programming::status::{apply_transition, is_workout_complete};
use wendler_programming::training_max::training_maxes_from_one_rep_maxes;

/// Result of saving a workout's actuals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// Status before the save
    pub previous_status: WorkoutStatus,
    /// Status after the save
    pub status: WorkoutStatus,
    /// Whether every movement's final set now has reps logged
    pub is_complete: bool,
}

impl SaveOutcome {
    /// Whether saving moved the workout to another status
    #[must_use]
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.status
    }
}

/// Runs the tracker's training flows with one validated configuration
#[derive(Debug, Clone)]
pub struct TrainingService {
    config: ProgramConfig,
}

impl TrainingService {
    /// Create a service over a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: ProgramConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a service from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            config: ProgramConfig::load()?,
        })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// First cycle of a new lifter from their one-rep maxes
    ///
    /// # Errors
    ///
    /// - `ProgramError::InvalidWeight` if a derived training max is not positive
    /// - `ProgramError::InvalidScheduleAssignment` if the day split is invalid
    pub fn onboard(
        &self,
        one_rep_maxes: &OneRepMaxSet,
        day1_movements: &[Movement],
        day2_movements: &[Movement],
        start_date: NaiveDate,
    ) -> ProgramResult<Cycle> {
        let training_maxes =
            training_maxes_from_one_rep_maxes(one_rep_maxes, self.config.training_max_percent)?;
        let cycle = CycleGenerator::new(&self.config).create_cycle(
            &training_maxes,
            day1_movements,
            day2_movements,
            start_date,
            FIRST_CYCLE_NUMBER,
        )?;
        info!(
            training_max_percent = self.config.training_max_percent,
            "Onboarded lifter"
        );
        Ok(cycle)
    }

    /// Move a not-started workout to in-progress
    ///
    /// # Errors
    ///
    /// - `ProgramError::InvalidWeek` or `ProgramError::InvalidScheduleAssignment` for an unknown slot
    /// - `ProgramError::InvalidTransition` if the workout is not startable
    pub fn start_workout(
        &self,
        cycle: &mut Cycle,
        week: u8,
        day: u8,
        at: DateTime<Utc>,
    ) -> ProgramResult<WorkoutStatus> {
        self.set_status(cycle, week, day, WorkoutStatus::InProgress, at)
    }

    /// Request a status change on one workout
    ///
    /// # Errors
    ///
    /// - `ProgramError::InvalidWeek` or `ProgramError::InvalidScheduleAssignment` for an unknown slot
    /// - `ProgramError::InvalidTransition` if the graph has no such edge
    pub fn set_status(
        &self,
        cycle: &mut Cycle,
        week: u8,
        day: u8,
        status: WorkoutStatus,
        at: DateTime<Utc>,
    ) -> ProgramResult<WorkoutStatus> {
        apply_transition(workout_slot(cycle, week, day)?, status, at)
    }

    /// Record actuals and complete the workout once every movement's final set is logged
    ///
    /// A not-started workout is started first. Terminal workouts keep their
    /// status; only their actuals are replaced.
    ///
    /// # Errors
    ///
    /// - `ProgramError::InvalidWeek` or `ProgramError::InvalidScheduleAssignment` for an unknown slot
    /// - `ProgramError::UnknownMovement` if an actual names a movement not trained that day
    pub fn save_workout(
        &self,
        cycle: &mut Cycle,
        week: u8,
        day: u8,
        actuals: BTreeMap<Movement, Vec<SetActual>>,
        at: DateTime<Utc>,
    ) -> ProgramResult<SaveOutcome> {
        let workout = workout_slot(cycle, week, day)?;
        if let Some(foreign) = actuals.keys().find(|movement| !workout.includes(**movement)) {
            return Err(ProgramError::unknown_movement(foreign.as_str()));
        }

        let previous_status = workout.status;
        for (movement, sets) in actuals {
            workout.record_actuals(movement, sets)?;
        }

        let is_complete = is_workout_complete(workout);
        if workout.status == WorkoutStatus::NotStarted {
            apply_transition(workout, WorkoutStatus::InProgress, at)?;
        }
        if is_complete && workout.status == WorkoutStatus::InProgress {
            apply_transition(workout, WorkoutStatus::Completed, at)?;
        }

        Ok(SaveOutcome {
            previous_status,
            status: workout.status,
            is_complete,
        })
    }

    /// Progress training maxes and build the following cycle
    ///
    /// The current cycle is marked inactive only when the new one was built,
    /// so a cycle hands over to exactly one successor.
    ///
    /// # Errors
    ///
    /// - `ProgramError::InvalidScheduleAssignment` if `current` is no longer active
    /// - `ProgramError::InvalidTransition` from the first open workout's status to `completed`
    ///   while any workout is not terminal
    /// - `ProgramError::MissingTrainingMax` if the current training maxes are incomplete
    pub fn create_next_cycle(
        &self,
        current: &mut Cycle,
        start_date: NaiveDate,
    ) -> ProgramResult<Cycle> {
        if !current.is_active {
            warn!(
                cycle.number = current.cycle_number.get(),
                "Next cycle requested from an inactive cycle"
            );
            return Err(ProgramError::invalid_schedule(format!(
                "cycle {} is no longer active; its next cycle was already created",
                current.cycle_number
            )));
        }
        if let Some(open) = current.first_open_workout() {
            warn!(
                cycle.number = current.cycle_number.get(),
                week = open.week,
                day = open.day,
                status = %open.status,
                "Next cycle requested before all workouts were finished"
            );
            return Err(ProgramError::InvalidTransition {
                from: open.status,
                to: WorkoutStatus::Completed,
            });
        }

        let training_maxes = ProgressionEngine::new(&self.config.progression)
            .next_training_maxes(&current.training_maxes)?;
        let next = CycleGenerator::new(&self.config).create_cycle_with_schedule(
            &training_maxes,
            current.schedule,
            start_date,
            current.cycle_number.saturating_add(1),
        )?;

        current.is_active = false;
        Ok(next)
    }
}

fn workout_slot(cycle: &mut Cycle, week: u8, day: u8) -> ProgramResult<&mut WorkoutPlan> {
    validate_week(week)?;
    if !(1..=DAYS_PER_WEEK).contains(&day) {
        return Err(ProgramError::invalid_schedule(format!(
            "day {day} is not a training day; expected 1-{DAYS_PER_WEEK}"
        )));
    }
    cycle.workout_mut(week, day).ok_or_else(|| {
        ProgramError::invalid_schedule(format!("cycle has no workout for week {week} day {day}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TrainingService {
        TrainingService::new(ProgramConfig::default()).unwrap()
    }

    fn cycle(service: &TrainingService) -> Cycle {
        let one_rep_maxes =
            OneRepMaxSet::new(wendler_core::models::WeightUnit::Pounds, 300.0, 200.0, 400.0, 150.0)
                .unwrap();
        service
            .onboard(
                &one_rep_maxes,
                &[Movement::Squat, Movement::Bench],
                &[Movement::Deadlift, Movement::OverheadPress],
                NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ProgramConfig::default();
        config.training_max_percent = 10;
        assert!(TrainingService::new(config).is_err());
    }

    #[test]
    fn test_unknown_slots() {
        let service = service();
        let mut cycle = cycle(&service);
        let at = Utc::now();

        assert_eq!(
            service.start_workout(&mut cycle, 5, 1, at),
            Err(ProgramError::InvalidWeek { week: 5 })
        );
        assert!(matches!(
            service.start_workout(&mut cycle, 1, 3, at),
            Err(ProgramError::InvalidScheduleAssignment { .. })
        ));
    }

    #[test]
    fn test_save_rejects_movement_from_other_day() {
        let service = service();
        let mut cycle = cycle(&service);
        let before = cycle.clone();
        let actuals = BTreeMap::from([
            (Movement::Squat, vec![SetActual::reps(5)]),
            (Movement::Deadlift, vec![SetActual::reps(5)]),
        ]);

        let result = service.save_workout(&mut cycle, 1, 1, actuals, Utc::now());
        assert_eq!(result, Err(ProgramError::unknown_movement("deadlift")));
        assert_eq!(cycle, before);
    }
}
