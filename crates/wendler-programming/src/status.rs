// ABOUTME: Workout status state machine and completion predicate
// ABOUTME: Enforces not-started -> in-progress -> terminal, with an explicit manual reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Status State Machine
//!
//! ```text
//! not-started ──> in-progress ──> completed | dnf | skipped
//!      ^                                   │
//!      └────────────── reset ──────────────┘
//! ```
//!
//! Completion is derived separately by [`is_workout_complete`]; it never
//! changes a status on its own. Callers decide whether to transition.
//!
//! A workout counts as complete when the final recorded set of every
//! assigned movement has reps logged. Earlier sets are not checked, which is
//! lenient: a lifter can log only the AMRAP set and still complete the day.

use chrono::{DateTime, Utc};
use tracing::debug;
use wendler_core::models::{SetActual, WorkoutPlan, WorkoutStatus};
use wendler_core::{ProgramError, ProgramResult};

/// Whether the graph has an edge from `current` to `requested`
///
/// The graph has no self-edges; re-requesting the current status fails.
#[must_use]
pub const fn can_transition(current: WorkoutStatus, requested: WorkoutStatus) -> bool {
    use WorkoutStatus::{Completed, Dnf, InProgress, NotStarted, Skipped};

    matches!(
        (current, requested),
        (NotStarted, InProgress)
            | (InProgress, Completed | Dnf | Skipped)
            | (Completed | Dnf | Skipped, NotStarted)
    )
}

/// Validate a status change
///
/// # Errors
///
/// Returns `ProgramError::InvalidTransition` if `requested` is unreachable from `current`
pub const fn transition(
    current: WorkoutStatus,
    requested: WorkoutStatus,
) -> ProgramResult<WorkoutStatus> {
    if can_transition(current, requested) {
        Ok(requested)
    } else {
        Err(ProgramError::InvalidTransition {
            from: current,
            to: requested,
        })
    }
}

/// Move a workout to a new status, maintaining its completion timestamp
///
/// Entering `completed` stamps `completed_at` with `at`; entering any other
/// status clears it.
///
/// # Errors
///
/// Returns `ProgramError::InvalidTransition` if `requested` is unreachable
pub fn apply_transition(
    workout: &mut WorkoutPlan,
    requested: WorkoutStatus,
    at: DateTime<Utc>,
) -> ProgramResult<WorkoutStatus> {
    let current = workout.status;
    let next = transition(current, requested)?;
    workout.status = next;
    workout.completed_at = (next == WorkoutStatus::Completed).then_some(at);
    debug!(
        week = workout.week,
        day = workout.day,
        from = %current,
        to = %next,
        "Workout status changed"
    );
    Ok(next)
}

/// Whether a movement's final recorded set has reps logged
#[must_use]
pub fn is_movement_complete(actuals: &[SetActual]) -> bool {
    actuals
        .last()
        .and_then(|set| set.completed_reps)
        .is_some_and(|reps| reps > 0)
}

/// Whether every movement assigned to the workout is complete
#[must_use]
pub fn is_workout_complete(workout: &WorkoutPlan) -> bool {
    !workout.movements.is_empty()
        && workout.movements.iter().all(|&movement| {
            workout
                .actuals_for(movement)
                .is_some_and(is_movement_complete)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use wendler_core::models::Movement;

    fn workout() -> WorkoutPlan {
        WorkoutPlan::new(
            1,
            1,
            vec![Movement::Squat, Movement::Bench],
            BTreeMap::new(),
        )
    }

    #[test]
    fn test_forward_path() {
        assert_eq!(
            transition(WorkoutStatus::NotStarted, WorkoutStatus::InProgress),
            Ok(WorkoutStatus::InProgress)
        );
        for terminal in [
            WorkoutStatus::Completed,
            WorkoutStatus::Dnf,
            WorkoutStatus::Skipped,
        ] {
            assert_eq!(transition(WorkoutStatus::InProgress, terminal), Ok(terminal));
        }
    }

    #[test]
    fn test_terminal_cannot_resume_without_reset() {
        assert_eq!(
            transition(WorkoutStatus::Completed, WorkoutStatus::InProgress),
            Err(ProgramError::InvalidTransition {
                from: WorkoutStatus::Completed,
                to: WorkoutStatus::InProgress,
            })
        );
        assert!(transition(WorkoutStatus::Dnf, WorkoutStatus::Completed).is_err());
        assert_eq!(
            transition(WorkoutStatus::Completed, WorkoutStatus::NotStarted),
            Ok(WorkoutStatus::NotStarted)
        );
    }

    #[test]
    fn test_in_progress_cannot_go_back_to_not_started() {
        assert!(transition(WorkoutStatus::InProgress, WorkoutStatus::NotStarted).is_err());
    }

    #[test]
    fn test_not_started_cannot_jump_to_terminal() {
        assert!(transition(WorkoutStatus::NotStarted, WorkoutStatus::Completed).is_err());
        assert!(transition(WorkoutStatus::NotStarted, WorkoutStatus::Skipped).is_err());
    }

    #[test]
    fn test_same_status_is_not_an_edge() {
        for status in WorkoutStatus::ALL {
            assert_eq!(
                transition(status, status),
                Err(ProgramError::InvalidTransition {
                    from: status,
                    to: status,
                })
            );
        }
    }

    #[test]
    fn test_apply_transition_stamps_and_clears_completion() {
        let at = Utc::now();
        let mut workout = workout();

        apply_transition(&mut workout, WorkoutStatus::InProgress, at).unwrap();
        assert!(workout.completed_at.is_none());

        apply_transition(&mut workout, WorkoutStatus::Completed, at).unwrap();
        assert_eq!(workout.completed_at, Some(at));

        apply_transition(&mut workout, WorkoutStatus::NotStarted, at).unwrap();
        assert_eq!(workout.status, WorkoutStatus::NotStarted);
        assert!(workout.completed_at.is_none());
    }

    #[test]
    fn test_failed_transition_leaves_workout_untouched() {
        let mut workout = workout();
        let before = workout.clone();
        assert!(apply_transition(&mut workout, WorkoutStatus::Dnf, Utc::now()).is_err());
        assert_eq!(workout, before);
    }

    #[test]
    fn test_movement_completion_uses_final_set() {
        let done = [SetActual::reps(5), SetActual::reps(5), SetActual::reps(8)];
        let missed = [SetActual::reps(5), SetActual::reps(5), SetActual::reps(0)];
        let unlogged = [SetActual::reps(5), SetActual::default()];
        let only_last = [SetActual::default(), SetActual::default(), SetActual::reps(3)];

        assert!(is_movement_complete(&done));
        assert!(!is_movement_complete(&missed));
        assert!(!is_movement_complete(&unlogged));
        assert!(is_movement_complete(&only_last));
        assert!(!is_movement_complete(&[]));
    }

    #[test]
    fn test_workout_completion_requires_every_movement() {
        let mut workout = workout();
        assert!(!is_workout_complete(&workout));

        workout
            .record_actuals(Movement::Squat, vec![SetActual::reps(7)])
            .unwrap();
        assert!(!is_workout_complete(&workout));

        workout
            .record_actuals(Movement::Bench, vec![SetActual::reps(5), SetActual::reps(9)])
            .unwrap();
        assert!(is_workout_complete(&workout));
    }
}
