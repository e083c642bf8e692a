// ABOUTME: Training max derivation from one-rep maxes
// ABOUTME: Keeps the exact product; rounding happens per prescribed set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use wendler_core::models::training_max::validate_weight;
use wendler_core::models::{OneRepMaxSet, TrainingMaxSet};
use wendler_core::ProgramResult;

/// Training max of one lift as `percent`% of its one-rep max, unrounded
///
/// # Errors
///
/// Returns `ProgramError::InvalidWeight` if the one-rep max or the result is not positive
pub fn training_max_from_one_rep_max(one_rep_max: f64, percent: u8) -> ProgramResult<f64> {
    let one_rep_max = validate_weight(one_rep_max)?;
    validate_weight(one_rep_max * f64::from(percent) / 100.0)
}

/// Training maxes of every lift in a one-rep max set, in the same unit
///
/// # Errors
///
/// Returns `ProgramError::InvalidWeight` if any derived training max is not positive
pub fn training_maxes_from_one_rep_maxes(
    one_rep_maxes: &OneRepMaxSet,
    percent: u8,
) -> ProgramResult<TrainingMaxSet> {
    let maxes = one_rep_maxes
        .iter()
        .map(|(movement, one_rep_max)| {
            training_max_from_one_rep_max(one_rep_max, percent).map(|tm| (movement, tm))
        })
        .collect::<ProgramResult<Vec<_>>>()?;
    TrainingMaxSet::from_maxes(one_rep_maxes.unit(), maxes)
}
