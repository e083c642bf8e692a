// ABOUTME: Cycle summary - completion counts, current week, deload and next-cycle readiness
// ABOUTME: Read-only view over a cycle's workout statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use wendler_core::constants::cycle::{DELOAD_WEEK, WEEKS_PER_CYCLE};
use wendler_core::models::{Cycle, WorkoutStatus};

/// Progress overview of a cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSummary {
    /// Cycle sequence number
    pub cycle_number: u32,
    /// Number of workouts in the cycle
    pub total_workouts: usize,
    /// Workouts with status `completed`
    pub completed_workouts: usize,
    /// Workouts that are completed, DNF, or skipped
    pub terminal_workouts: usize,
    /// Completed share of all workouts, 0-100
    pub completion_percentage: f64,
    /// First week that still has an open workout (4 once everything is done)
    pub current_week: u8,
    /// Whether the current week is the deload
    pub is_deload_week: bool,
    /// Whether every workout is terminal, so the next cycle may be generated
    pub ready_for_next_cycle: bool,
}

/// Summarize a cycle's progress
#[must_use]
pub fn summarize(cycle: &Cycle) -> CycleSummary {
    let total_workouts = cycle.workouts.len();
    let completed_workouts = cycle
        .workouts
        .iter()
        .filter(|workout| workout.status == WorkoutStatus::Completed)
        .count();
    let terminal_workouts = cycle
        .workouts
        .iter()
        .filter(|workout| workout.status.is_terminal())
        .count();
    let completion_percentage = if total_workouts == 0 {
        0.0
    } else {
        completed_workouts as f64 / total_workouts as f64 * 100.0
    };
    let current_week = cycle
        .first_open_workout()
        .map_or(WEEKS_PER_CYCLE, |workout| workout.week);

    CycleSummary {
        cycle_number: cycle.cycle_number.get(),
        total_workouts,
        completed_workouts,
        terminal_workouts,
        completion_percentage,
        current_week,
        is_deload_week: current_week == DELOAD_WEEK,
        ready_for_next_cycle: total_workouts > 0 && cycle.all_workouts_terminal(),
    }
}
