// ABOUTME: Weight rounding policy - snaps percentage weights to loadable plate increments
// ABOUTME: Increment and direction come from configuration, not from the unit alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use wendler_core::models::training_max::validate_weight;
use wendler_core::models::WeightUnit;
use wendler_core::{ProgramError, ProgramResult};

use crate::config::{RoundingConfig, RoundingMode};

/// Round a raw weight to the configured loadable increment for its unit
///
/// A positive raw weight never rounds to zero: anything lighter than one
/// increment loads as one increment.
///
/// # Errors
///
/// Returns `ProgramError::InvalidWeight` if the raw weight (or the configured
/// increment) is zero, negative, or not finite
pub fn round_to_loadable(
    raw_weight: f64,
    unit: WeightUnit,
    config: &RoundingConfig,
) -> ProgramResult<f64> {
    let raw_weight = validate_weight(raw_weight)?;
    let increment = config.increment(unit);
    if !(increment.is_finite() && increment > 0.0) {
        return Err(ProgramError::InvalidWeight { weight: increment });
    }

    let steps = raw_weight / increment;
    let steps = match config.mode {
        RoundingMode::Nearest => steps.round(),
        RoundingMode::Down => steps.floor(),
        RoundingMode::Up => steps.ceil(),
    };
    Ok(steps.max(1.0) * increment)
}
