// ABOUTME: Movement enumeration for the four 5/3/1 barbell lifts
// ABOUTME: Parsing, display names, and upper/lower body categorization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ProgramError;

/// One of the four main lifts of the program
///
/// Closed enumeration used as the key of every per-lift map. Declaration
/// order (squat, bench, deadlift, overhead press) is the iteration order of
/// those maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    /// Back squat
    Squat,
    /// Bench press
    Bench,
    /// Conventional deadlift
    Deadlift,
    /// Standing overhead press
    OverheadPress,
}

/// Body region a movement loads, which decides its progression increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftCategory {
    /// Bench and overhead press
    UpperBody,
    /// Squat and deadlift
    LowerBody,
}

impl Movement {
    /// Every movement, in map order
    pub const ALL: [Self; 4] = [Self::Squat, Self::Bench, Self::Deadlift, Self::OverheadPress];

    /// Wire name of the movement
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Bench => "bench",
            Self::Deadlift => "deadlift",
            Self::OverheadPress => "overhead_press",
        }
    }

    /// Name for display, e.g. "Overhead Press"
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::Bench => "Bench",
            Self::Deadlift => "Deadlift",
            Self::OverheadPress => "Overhead Press",
        }
    }

    /// Upper or lower body
    #[must_use]
    pub const fn category(self) -> LiftCategory {
        match self {
            Self::Bench | Self::OverheadPress => LiftCategory::UpperBody,
            Self::Squat | Self::Deadlift => LiftCategory::LowerBody,
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Movement {
    type Err = ProgramError;

    /// Accepts the wire name, case-insensitively, with `-` or space in place of `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "squat" => Ok(Self::Squat),
            "bench" => Ok(Self::Bench),
            "deadlift" => Ok(Self::Deadlift),
            "overhead_press" => Ok(Self::OverheadPress),
            _ => Err(ProgramError::unknown_movement(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_display_spellings() {
        assert_eq!("overhead_press".parse::<Movement>(), Ok(Movement::OverheadPress));
        assert_eq!("Overhead Press".parse::<Movement>(), Ok(Movement::OverheadPress));
        assert_eq!(" BENCH ".parse::<Movement>(), Ok(Movement::Bench));
    }

    #[test]
    fn test_parse_rejects_unknown_movement() {
        let err = "front_squat".parse::<Movement>().unwrap_err();
        assert_eq!(err, ProgramError::unknown_movement("front_squat"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(Movement::Squat.category(), LiftCategory::LowerBody);
        assert_eq!(Movement::Deadlift.category(), LiftCategory::LowerBody);
        assert_eq!(Movement::Bench.category(), LiftCategory::UpperBody);
        assert_eq!(Movement::OverheadPress.category(), LiftCategory::UpperBody);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Movement::OverheadPress).unwrap();
        assert_eq!(json, "\"overhead_press\"");
        assert!(serde_json::from_str::<Movement>("\"snatch\"").is_err());
    }
}
