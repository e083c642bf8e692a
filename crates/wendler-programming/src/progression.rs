// ABOUTME: Progression engine - next cycle's training maxes from the current ones
// ABOUTME: Upper body lifts gain a small increment, lower body lifts a larger one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;
use wendler_core::models::{LiftCategory, Movement, TrainingMaxSet};
use wendler_core::ProgramResult;

use crate::config::ProgressionConfig;

/// Computes training max increases between cycles
///
/// Only computes numbers. Checking that the finished cycle is all terminal
/// and creating the next cycle are the caller's steps.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionEngine<'a> {
    config: &'a ProgressionConfig,
}

impl<'a> ProgressionEngine<'a> {
    /// Create an engine over progression increments
    #[must_use]
    pub const fn new(config: &'a ProgressionConfig) -> Self {
        Self { config }
    }

    /// Increment applied to a movement, in the training maxes' unit
    #[must_use]
    pub const fn increment_for(&self, movement: Movement) -> f64 {
        match movement.category() {
            LiftCategory::UpperBody => self.config.upper_body_increment,
            LiftCategory::LowerBody => self.config.lower_body_increment,
        }
    }

    /// Training maxes for the next cycle
    ///
    /// # Errors
    ///
    /// - `ProgramError::MissingTrainingMax` if the current set is incomplete
    /// - `ProgramError::InvalidWeight` if an increment drives a training max to zero or below
    pub fn next_training_maxes(&self, current: &TrainingMaxSet) -> ProgramResult<TrainingMaxSet> {
        current.ensure_complete()?;

        let next = TrainingMaxSet::from_maxes(
            current.unit(),
            current
                .iter()
                .map(|(movement, training_max)| {
                    (movement, training_max + self.increment_for(movement))
                }),
        )?;

        for (movement, training_max) in next.iter() {
            info!(
                movement = %movement,
                training_max,
                unit = %next.unit(),
                "Progressed training max"
            );
        }
        Ok(next)
    }
}
