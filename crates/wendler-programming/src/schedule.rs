// ABOUTME: Percentage schedule of the four-week 5/3/1 cycle
// ABOUTME: Working set templates per week plus configurable warm-up templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Percentage Schedule
//!
//! Fixed program data. Percentages are whole numbers of the training max so
//! weight calculations stay exact for whole-number training maxes.
//!
//! | Week | Set 1 | Set 2 | Set 3 |
//! |------|-------|-------|-------|
//! | 1 "5s" | 65% x5 | 75% x5 | 85% x5+ |
//! | 2 "3s" | 70% x3 | 80% x3 | 90% x3+ |
//! | 3 "5/3/1" | 75% x5 | 85% x3 | 95% x1+ |
//! | 4 deload | 40% x5 | 50% x5 | 60% x5 |

use serde::{Deserialize, Serialize};
use wendler_core::constants::cycle::WEEKS_PER_CYCLE;
use wendler_core::models::{SetType, TargetReps};
use wendler_core::{ProgramError, ProgramResult};

use crate::config::WarmupConfig;

/// Prescription template before a training max is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTemplate {
    /// Whole percentage of the training max
    pub percent: u8,
    /// Rep target
    pub target_reps: TargetReps,
    /// Warm-up or working
    pub set_type: SetType,
}

impl SetTemplate {
    const fn working(percent: u8, reps: u32) -> Self {
        Self {
            percent,
            target_reps: TargetReps::Fixed { reps },
            set_type: SetType::Working,
        }
    }

    const fn amrap(percent: u8, minimum: u32) -> Self {
        Self {
            percent,
            target_reps: TargetReps::Amrap { minimum },
            set_type: SetType::Working,
        }
    }

    /// Warm-up template at a fixed rep count
    #[must_use]
    pub const fn warmup(percent: u8, reps: u32) -> Self {
        Self {
            percent,
            target_reps: TargetReps::Fixed { reps },
            set_type: SetType::Warmup,
        }
    }

    /// Percentage as a fraction of the training max
    #[must_use]
    pub fn fraction(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }
}

const WEEK_1: [SetTemplate; 3] = [
    SetTemplate::working(65, 5),
    SetTemplate::working(75, 5),
    SetTemplate::amrap(85, 5),
];

const WEEK_2: [SetTemplate; 3] = [
    SetTemplate::working(70, 3),
    SetTemplate::working(80, 3),
    SetTemplate::amrap(90, 3),
];

const WEEK_3: [SetTemplate; 3] = [
    SetTemplate::working(75, 5),
    SetTemplate::working(85, 3),
    SetTemplate::amrap(95, 1),
];

const WEEK_4: [SetTemplate; 3] = [
    SetTemplate::working(40, 5),
    SetTemplate::working(50, 5),
    SetTemplate::working(60, 5),
];

/// Reject week numbers outside the cycle
///
/// # Errors
///
/// Returns `ProgramError::InvalidWeek` unless `week` is 1-4
pub fn validate_week(week: u8) -> ProgramResult<u8> {
    if (1..=WEEKS_PER_CYCLE).contains(&week) {
        Ok(week)
    } else {
        Err(ProgramError::InvalidWeek { week })
    }
}

/// Working set templates of a week
///
/// # Errors
///
/// Returns `ProgramError::InvalidWeek` unless `week` is 1-4
pub fn working_sets(week: u8) -> ProgramResult<&'static [SetTemplate]> {
    match validate_week(week)? {
        1 => Ok(&WEEK_1),
        2 => Ok(&WEEK_2),
        3 => Ok(&WEEK_3),
        _ => Ok(&WEEK_4),
    }
}

/// Full ordered template list of a week: warm-ups, then working sets
///
/// # Errors
///
/// Returns `ProgramError::InvalidWeek` unless `week` is 1-4
pub fn schedule(week: u8, warmups: &WarmupConfig) -> ProgramResult<Vec<SetTemplate>> {
    let working = working_sets(week)?;
    let mut templates: Vec<SetTemplate> = if warmups.enabled {
        warmups
            .sets
            .iter()
            .map(|set| SetTemplate::warmup(set.percent, set.reps))
            .collect()
    } else {
        Vec::new()
    };
    templates.extend_from_slice(working);
    // Warm-ups ascending, working ascending, AMRAP last
    templates.sort_by_key(|t| (t.set_type, t.target_reps.is_amrap(), t.percent));
    Ok(templates)
}

/// Name lifters use for a week
///
/// # Errors
///
/// Returns `ProgramError::InvalidWeek` unless `week` is 1-4
pub fn week_label(week: u8) -> ProgramResult<&'static str> {
    match validate_week(week)? {
        1 => Ok("5s week"),
        2 => Ok("3s week"),
        3 => Ok("5/3/1 week"),
        _ => Ok("Deload week"),
    }
}
