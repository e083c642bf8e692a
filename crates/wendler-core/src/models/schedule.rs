// ABOUTME: Day split assignment - which two movements are trained on each day
// ABOUTME: Validated by the cycle generator before a cycle is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Movement;

/// Two-day split of the four movements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSchedule {
    /// Movements of day 1
    pub day1_movements: [Movement; 2],
    /// Movements of day 2
    pub day2_movements: [Movement; 2],
}

impl WorkoutSchedule {
    /// `(day number, movements)` for every training day of a week
    #[must_use]
    pub const fn days(&self) -> [(u8, [Movement; 2]); 2] {
        [(1, self.day1_movements), (2, self.day2_movements)]
    }

    /// Day on which a movement is trained
    #[must_use]
    pub fn day_of(&self, movement: Movement) -> Option<u8> {
        self.days()
            .into_iter()
            .find(|(_, movements)| movements.contains(&movement))
            .map(|(day, _)| day)
    }
}
