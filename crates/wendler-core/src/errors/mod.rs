// ABOUTME: Validation error types for the 5/3/1 programming engine
// ABOUTME: Maps each failure to a stable error code and user-facing HTTP status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every failure the engine reports is a local validation failure on
//! caller-supplied data. None of them are transient, so none are retryable,
//! and none indicate corrupted internal state: the engine holds no mutable
//! state of its own.
//!
//! The calling layer is expected to surface these as validation messages
//! (for example "please select two distinct movements per day"). The
//! [`ErrorCode`] mapping gives an API layer a stable machine-readable code and
//! an HTTP status for each kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Movement, WorkoutStatus};

/// Result type for engine operations
pub type ProgramResult<T> = Result<T, ProgramError>;

/// Standard error codes for the engine's validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Week outside the 1-4 range of a cycle
    #[serde(rename = "INVALID_WEEK")]
    InvalidWeek = 3100,
    /// Zero, negative, or non-finite weight
    #[serde(rename = "INVALID_WEIGHT")]
    InvalidWeight = 3101,
    /// Movement name outside the fixed enumeration
    #[serde(rename = "UNKNOWN_MOVEMENT")]
    UnknownMovement = 3102,
    /// Training max missing for an assigned movement
    #[serde(rename = "MISSING_TRAINING_MAX")]
    MissingTrainingMax = 3103,
    /// Day split does not cover every movement exactly once
    #[serde(rename = "INVALID_SCHEDULE_ASSIGNMENT")]
    InvalidScheduleAssignment = 3104,
    /// Requested workout status is unreachable from the current one
    #[serde(rename = "INVALID_TRANSITION")]
    InvalidTransition = 4090,
}

impl ErrorCode {
    /// Get the HTTP status an API layer should answer with
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidWeek
            | Self::InvalidWeight
            | Self::UnknownMovement
            | Self::MissingTrainingMax
            | Self::InvalidScheduleAssignment => 400,
            Self::InvalidTransition => 409,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidWeek => "Weeks in a cycle are numbered 1 to 4",
            Self::InvalidWeight => "Weights must be positive numbers",
            Self::UnknownMovement => {
                "Movement must be one of squat, bench, deadlift, overhead_press"
            }
            Self::MissingTrainingMax => "A training max is required for every movement",
            Self::InvalidScheduleAssignment => {
                "Please select two distinct movements per day, covering all four lifts"
            }
            Self::InvalidTransition => "The workout cannot move to the requested status",
        }
    }
}

/// Validation failures reported by the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgramError {
    /// Week outside 1-4
    #[error("Invalid week {week}: a cycle has weeks 1 to 4")]
    InvalidWeek {
        /// The rejected week number
        week: u8,
    },

    /// Zero, negative, or non-finite weight
    #[error("Invalid weight {weight}: weights must be positive")]
    InvalidWeight {
        /// The rejected weight
        weight: f64,
    },

    /// Movement outside the fixed enumeration, or not assigned to the workout
    #[error("Unknown movement '{name}'")]
    UnknownMovement {
        /// The rejected movement name
        name: String,
    },

    /// Training max set lacks an entry for an assigned movement
    #[error("Missing training max for {movement}")]
    MissingTrainingMax {
        /// Movement without a training max
        movement: Movement,
    },

    /// Day split violates the two-distinct-movements-per-day coverage rule
    #[error("Invalid schedule assignment: {reason}")]
    InvalidScheduleAssignment {
        /// What is wrong with the split
        reason: String,
    },

    /// Requested status unreachable from the current status
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// Current status
        from: WorkoutStatus,
        /// Requested status
        to: WorkoutStatus,
    },
}

impl ProgramError {
    /// Create an "unknown movement" error
    #[must_use]
    pub fn unknown_movement(name: impl Into<String>) -> Self {
        Self::UnknownMovement { name: name.into() }
    }

    /// Create an "invalid schedule assignment" error
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidScheduleAssignment {
            reason: reason.into(),
        }
    }

    /// Get the stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidWeek { .. } => ErrorCode::InvalidWeek,
            Self::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            Self::UnknownMovement { .. } => ErrorCode::UnknownMovement,
            Self::MissingTrainingMax { .. } => ErrorCode::MissingTrainingMax,
            Self::InvalidScheduleAssignment { .. } => ErrorCode::InvalidScheduleAssignment,
            Self::InvalidTransition { .. } => ErrorCode::InvalidTransition,
        }
    }

    /// Engine failures never resolve by retrying the same input
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

/// Failure to parse a closed enumeration (unit, status) from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}': expected one of {expected}")]
pub struct ParseValueError {
    /// What was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Accepted spellings
    pub expected: &'static str,
}

/// Serializable error body for API and CLI output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message with the offending value
    pub message: String,
    /// Generic description of the error kind
    pub description: String,
    /// Whether retrying can succeed
    pub retryable: bool,
}

impl From<&ProgramError> for ErrorResponse {
    fn from(error: &ProgramError) -> Self {
        let code = error.code();
        Self {
            code,
            message: error.to_string(),
            description: code.description().to_owned(),
            retryable: error.is_retryable(),
        }
    }
}

impl From<ProgramError> for ErrorResponse {
    fn from(error: ProgramError) -> Self {
        Self::from(&error)
    }
}
