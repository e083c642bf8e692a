// ABOUTME: Prescribed set types - percentage of training max, target reps, computed weight
// ABOUTME: AMRAP is a distinct target-reps variant rather than a magic rep count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a set prepares for or counts toward the day's work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    /// Lighter preparation set, never gates completion
    Warmup,
    /// Programmed set at the week's percentage
    Working,
}

/// Rep target of a prescribed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetReps {
    /// Exactly this many reps
    Fixed {
        /// Prescribed rep count
        reps: u32,
    },
    /// As many reps as possible, with a minimum to reach ("5+")
    Amrap {
        /// Reps the lifter must at least hit
        minimum: u32,
    },
}

impl TargetReps {
    /// Whether this is the open-ended final set
    #[must_use]
    pub const fn is_amrap(self) -> bool {
        matches!(self, Self::Amrap { .. })
    }

    /// Lowest rep count that satisfies the prescription
    #[must_use]
    pub const fn minimum(self) -> u32 {
        match self {
            Self::Fixed { reps } => reps,
            Self::Amrap { minimum } => minimum,
        }
    }
}

impl fmt::Display for TargetReps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { reps } => write!(f, "{reps}"),
            Self::Amrap { minimum } => write!(f, "{minimum}+"),
        }
    }
}

/// One prescribed set of a movement in a workout
///
/// Immutable once generated: regenerating from the same training max and
/// rounding policy yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPrescription {
    /// Fraction of the training max, in (0, 1]
    pub percentage: f64,
    /// Rep target
    pub target_reps: TargetReps,
    /// Warm-up or working set
    #[serde(rename = "type")]
    pub set_type: SetType,
    /// Loadable weight after rounding
    pub computed_weight: f64,
    /// Optional short label such as "40% TM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SetPrescription {
    /// Whether this set counts toward the day's work
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.set_type == SetType::Working
    }

    /// Whether this is the AMRAP set
    #[must_use]
    pub const fn is_amrap(&self) -> bool {
        self.target_reps.is_amrap()
    }
}
