// ABOUTME: Workout generator - expands training maxes into a day's prescribed sets
// ABOUTME: Applies the week's percentage schedule and the rounding policy per movement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Generator
//!
//! Pure function of its inputs: the same training maxes, movements, week,
//! and configuration always produce the same sets.

use std::collections::BTreeMap;

use tracing::debug;
use wendler_core::models::{Movement, SetPrescription, SetType, TrainingMaxSet, WeightUnit, WorkoutPlan};
use wendler_core::ProgramResult;

use crate::config::ProgramConfig;
use crate::rounding::round_to_loadable;
use crate::schedule::{schedule, SetTemplate};

/// Prescribed sets keyed by movement
pub type MovementSets = BTreeMap<Movement, Vec<SetPrescription>>;

/// Generates the prescribed sets of single workouts
#[derive(Debug, Clone, Copy)]
pub struct WorkoutGenerator<'a> {
    config: &'a ProgramConfig,
}

impl<'a> WorkoutGenerator<'a> {
    /// Create a generator over a configuration
    #[must_use]
    pub const fn new(config: &'a ProgramConfig) -> Self {
        Self { config }
    }

    /// Ordered sets of every assigned movement for a week
    ///
    /// # Errors
    ///
    /// - `ProgramError::InvalidWeek` if the week is not 1-4
    /// - `ProgramError::MissingTrainingMax` if an assigned movement has no training max
    pub fn generate(
        &self,
        training_maxes: &TrainingMaxSet,
        movements: &[Movement],
        week: u8,
    ) -> ProgramResult<MovementSets> {
        let templates = schedule(week, &self.config.warmups)?;

        movements
            .iter()
            .map(|&movement| {
                let training_max = training_maxes.require(movement)?;
                let sets =
                    self.prescribe(&templates, training_max, training_maxes.unit())?;
                Ok((movement, sets))
            })
            .collect()
    }

    /// Same as [`Self::generate`] for movement names arriving from outside
    ///
    /// # Errors
    ///
    /// - `ProgramError::UnknownMovement` if a name is not one of the four movements
    /// - any error of [`Self::generate`]
    pub fn generate_named<S: AsRef<str>>(
        &self,
        training_maxes: &TrainingMaxSet,
        movements: &[S],
        week: u8,
    ) -> ProgramResult<MovementSets> {
        let movements = movements
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<ProgramResult<Vec<Movement>>>()?;
        self.generate(training_maxes, &movements, week)
    }

    /// Ordered sets of one movement with a given training max
    ///
    /// # Errors
    ///
    /// - `ProgramError::InvalidWeek` if the week is not 1-4
    /// - `ProgramError::InvalidWeight` if the training max is not positive
    pub fn movement_sets(
        &self,
        training_max: f64,
        unit: WeightUnit,
        week: u8,
    ) -> ProgramResult<Vec<SetPrescription>> {
        let templates = schedule(week, &self.config.warmups)?;
        self.prescribe(&templates, training_max, unit)
    }

    /// A not-started workout for one day slot
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`]
    pub fn build_workout(
        &self,
        training_maxes: &TrainingMaxSet,
        week: u8,
        day: u8,
        movements: &[Movement],
    ) -> ProgramResult<WorkoutPlan> {
        let sets = self.generate(training_maxes, movements, week)?;
        debug!(week, day, movements = ?movements, "Generated workout");
        Ok(WorkoutPlan::new(week, day, movements.to_vec(), sets))
    }

    fn prescribe(
        &self,
        templates: &[SetTemplate],
        training_max: f64,
        unit: WeightUnit,
    ) -> ProgramResult<Vec<SetPrescription>> {
        templates
            .iter()
            .map(|template| {
                let raw_weight = training_max * f64::from(template.percent) / 100.0;
                Ok(SetPrescription {
                    percentage: template.fraction(),
                    target_reps: template.target_reps,
                    set_type: template.set_type,
                    computed_weight: round_to_loadable(raw_weight, unit, &self.config.rounding)?,
                    notes: (template.set_type == SetType::Warmup)
                        .then(|| format!("{}% TM", template.percent)),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wendler_core::models::TargetReps;
    use wendler_core::ProgramError;

    fn training_maxes() -> TrainingMaxSet {
        TrainingMaxSet::from_maxes(
            WeightUnit::Pounds,
            [
                (Movement::Squat, 300.0),
                (Movement::Bench, 200.0),
                (Movement::Deadlift, 350.0),
                (Movement::OverheadPress, 140.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_week_one_squat_prescription() {
        let config = ProgramConfig::default();
        let generator = WorkoutGenerator::new(&config);
        let sets = generator
            .generate(&training_maxes(), &[Movement::Squat, Movement::Bench], 1)
            .unwrap();

        let squat = &sets[&Movement::Squat];
        let weights: Vec<f64> = squat.iter().map(|s| s.computed_weight).collect();
        // 40/50/60% warm-ups, then 65/75/85% working sets of 300
        assert_eq!(weights, vec![120.0, 150.0, 180.0, 195.0, 225.0, 255.0]);
        assert_eq!(squat[0].notes.as_deref(), Some("40% TM"));
        assert_eq!(squat[5].target_reps, TargetReps::Amrap { minimum: 5 });
        assert!(squat[5].notes.is_none());
    }

    #[test]
    fn test_only_assigned_movements_are_generated() {
        let config = ProgramConfig::default();
        let sets = WorkoutGenerator::new(&config)
            .generate(&training_maxes(), &[Movement::Deadlift, Movement::OverheadPress], 3)
            .unwrap();
        assert_eq!(sets.len(), 2);
        assert!(!sets.contains_key(&Movement::Squat));
    }

    #[test]
    fn test_missing_training_max() {
        let config = ProgramConfig::default();
        let partial =
            TrainingMaxSet::from_maxes(WeightUnit::Pounds, [(Movement::Squat, 300.0)]).unwrap();

        let result =
            WorkoutGenerator::new(&config).generate(&partial, &[Movement::Squat, Movement::Bench], 2);
        assert_eq!(
            result,
            Err(ProgramError::MissingTrainingMax {
                movement: Movement::Bench
            })
        );
    }

    #[test]
    fn test_unknown_movement_name() {
        let config = ProgramConfig::default();
        let result =
            WorkoutGenerator::new(&config).generate_named(&training_maxes(), &["squat", "curl"], 1);
        assert_eq!(result, Err(ProgramError::unknown_movement("curl")));
    }

    #[test]
    fn test_invalid_week_is_checked_before_movements() {
        let config = ProgramConfig::default();
        let empty = TrainingMaxSet::new(WeightUnit::Pounds);
        let result = WorkoutGenerator::new(&config).generate(&empty, &[Movement::Squat], 0);
        assert_eq!(result, Err(ProgramError::InvalidWeek { week: 0 }));
    }
}
