// ABOUTME: Workout status enumeration
// ABOUTME: not-started, in-progress, and the terminal completed/dnf/skipped states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseValueError;

/// Lifecycle status of a single workout
///
/// The allowed moves between these states are enforced by the status state
/// machine in `wendler-programming`; this type only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutStatus {
    /// Generated, not yet begun
    #[default]
    NotStarted,
    /// Begun, actuals may be partially recorded
    InProgress,
    /// Finished
    Completed,
    /// Attempted but did not finish
    Dnf,
    /// Deliberately not performed
    Skipped,
}

impl WorkoutStatus {
    /// Every status, in lifecycle order
    pub const ALL: [Self; 5] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::Dnf,
        Self::Skipped,
    ];

    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Dnf => "dnf",
            Self::Skipped => "skipped",
        }
    }

    /// Completed, DNF, and skipped end a workout
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Dnf | Self::Skipped)
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseValueError {
                kind: "workout status",
                value: s.to_owned(),
                expected: "not-started, in-progress, completed, dnf, skipped",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!WorkoutStatus::NotStarted.is_terminal());
        assert!(!WorkoutStatus::InProgress.is_terminal());
        assert!(WorkoutStatus::Completed.is_terminal());
        assert!(WorkoutStatus::Dnf.is_terminal());
        assert!(WorkoutStatus::Skipped.is_terminal());
    }

    #[test]
    fn test_round_trips_wire_names() {
        for status in WorkoutStatus::ALL {
            assert_eq!(status.as_str().parse::<WorkoutStatus>(), Ok(status));
        }
        assert_eq!("in_progress".parse::<WorkoutStatus>(), Ok(WorkoutStatus::InProgress));
        assert!("done".parse::<WorkoutStatus>().is_err());
    }
}
