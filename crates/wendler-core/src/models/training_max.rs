// ABOUTME: Per-movement weight maps for one-rep maxes and training maxes
// ABOUTME: Validates that every stored weight is positive and finite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Movement, WeightUnit};
use crate::errors::{ProgramError, ProgramResult};

/// Reject zero, negative, NaN, and infinite weights
///
/// # Errors
///
/// Returns `ProgramError::InvalidWeight` if the weight is not a positive finite number
pub fn validate_weight(weight: f64) -> ProgramResult<f64> {
    if weight.is_finite() && weight > 0.0 {
        Ok(weight)
    } else {
        Err(ProgramError::InvalidWeight { weight })
    }
}

fn validated_map(
    weights: impl IntoIterator<Item = (Movement, f64)>,
) -> ProgramResult<BTreeMap<Movement, f64>> {
    weights
        .into_iter()
        .map(|(movement, weight)| validate_weight(weight).map(|w| (movement, w)))
        .collect()
}

/// Training max per movement plus the unit they are expressed in
///
/// An active cycle always carries exactly one value per movement; a set
/// under construction may be partial, and [`TrainingMaxSet::ensure_complete`]
/// reports the first movement still missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LiftWeightsRecord")]
pub struct TrainingMaxSet {
    unit: WeightUnit,
    maxes: BTreeMap<Movement, f64>,
}

impl TrainingMaxSet {
    /// Create an empty set in the given unit
    #[must_use]
    pub const fn new(unit: WeightUnit) -> Self {
        Self {
            unit,
            maxes: BTreeMap::new(),
        }
    }

    /// Build a set from `(movement, training max)` pairs
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::InvalidWeight` if any weight is not positive
    pub fn from_maxes(
        unit: WeightUnit,
        maxes: impl IntoIterator<Item = (Movement, f64)>,
    ) -> ProgramResult<Self> {
        Ok(Self {
            unit,
            maxes: validated_map(maxes)?,
        })
    }

    /// Set (or replace) the training max of one movement
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::InvalidWeight` if the weight is not positive
    pub fn insert(&mut self, movement: Movement, weight: f64) -> ProgramResult<()> {
        self.maxes.insert(movement, validate_weight(weight)?);
        Ok(())
    }

    /// Unit of every weight in the set
    #[must_use]
    pub const fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Training max of a movement, if present
    #[must_use]
    pub fn get(&self, movement: Movement) -> Option<f64> {
        self.maxes.get(&movement).copied()
    }

    /// Training max of a movement that must be present
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::MissingTrainingMax` if the movement has no entry
    pub fn require(&self, movement: Movement) -> ProgramResult<f64> {
        self.get(movement)
            .ok_or(ProgramError::MissingTrainingMax { movement })
    }

    /// Check that all four movements have a training max
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::MissingTrainingMax` naming the first missing movement
    pub fn ensure_complete(&self) -> ProgramResult<()> {
        Movement::ALL
            .iter()
            .try_for_each(|&movement| self.require(movement).map(|_| ()))
    }

    /// Iterate `(movement, training max)` in movement order
    pub fn iter(&self) -> impl Iterator<Item = (Movement, f64)> + '_ {
        self.maxes.iter().map(|(&movement, &weight)| (movement, weight))
    }

    /// Number of movements with a training max
    #[must_use]
    pub fn len(&self) -> usize {
        self.maxes.len()
    }

    /// Whether no movement has a training max yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maxes.is_empty()
    }
}

/// The four one-rep maxes a lifter enters during onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LiftWeightsRecord")]
pub struct OneRepMaxSet {
    unit: WeightUnit,
    #[serde(rename = "maxes")]
    lifts: BTreeMap<Movement, f64>,
}

impl OneRepMaxSet {
    /// Record all four one-rep maxes
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::InvalidWeight` if any weight is not positive
    pub fn new(
        unit: WeightUnit,
        squat: f64,
        bench: f64,
        deadlift: f64,
        overhead_press: f64,
    ) -> ProgramResult<Self> {
        Ok(Self {
            unit,
            lifts: validated_map([
                (Movement::Squat, squat),
                (Movement::Bench, bench),
                (Movement::Deadlift, deadlift),
                (Movement::OverheadPress, overhead_press),
            ])?,
        })
    }

    /// Unit of every weight in the set
    #[must_use]
    pub const fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// One-rep max of a movement, if present
    #[must_use]
    pub fn get(&self, movement: Movement) -> Option<f64> {
        self.lifts.get(&movement).copied()
    }

    /// Iterate `(movement, one-rep max)` in movement order
    pub fn iter(&self) -> impl Iterator<Item = (Movement, f64)> + '_ {
        self.lifts.iter().map(|(&movement, &weight)| (movement, weight))
    }
}

/// Wire shape shared by both weight maps, validated on the way in
#[derive(Deserialize)]
struct LiftWeightsRecord {
    #[serde(default)]
    unit: WeightUnit,
    maxes: BTreeMap<Movement, f64>,
}

impl TryFrom<LiftWeightsRecord> for TrainingMaxSet {
    type Error = ProgramError;

    fn try_from(record: LiftWeightsRecord) -> Result<Self, Self::Error> {
        Self::from_maxes(record.unit, record.maxes)
    }
}

impl TryFrom<LiftWeightsRecord> for OneRepMaxSet {
    type Error = ProgramError;

    fn try_from(record: LiftWeightsRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            unit: record.unit,
            lifts: validated_map(record.maxes)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_weights() {
        let mut maxes = TrainingMaxSet::new(WeightUnit::Pounds);
        assert_eq!(
            maxes.insert(Movement::Squat, 0.0),
            Err(ProgramError::InvalidWeight { weight: 0.0 })
        );
        assert!(maxes.insert(Movement::Squat, -5.0).is_err());
        assert!(maxes.insert(Movement::Squat, f64::NAN).is_err());
        assert!(maxes.is_empty());
    }

    #[test]
    fn test_ensure_complete_names_first_missing_movement() {
        let maxes = TrainingMaxSet::from_maxes(
            WeightUnit::Pounds,
            [(Movement::Squat, 300.0), (Movement::Bench, 200.0)],
        )
        .unwrap();

        assert_eq!(
            maxes.ensure_complete(),
            Err(ProgramError::MissingTrainingMax {
                movement: Movement::Deadlift
            })
        );
    }

    #[test]
    fn test_deserialization_validates_weights() {
        let json = r#"{"unit":"kg","maxes":{"squat":140.0,"bench":-1.0}}"#;
        assert!(serde_json::from_str::<TrainingMaxSet>(json).is_err());

        let json = r#"{"unit":"kg","maxes":{"squat":140.0,"overhead_press":50.0}}"#;
        let maxes: TrainingMaxSet = serde_json::from_str(json).unwrap();
        assert_eq!(maxes.unit(), WeightUnit::Kilograms);
        assert_eq!(maxes.get(Movement::OverheadPress), Some(50.0));
    }
}
