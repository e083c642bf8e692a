// ABOUTME: Integration tests for the JSON shape of cycles and their records
// ABOUTME: Checks wire names of enums and that a stored cycle loads back unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serde_json::json;
use wendler_tracker::errors::{ErrorResponse, ProgramError};
use wendler_tracker::models::{Cycle, Movement, TargetReps, TrainingMaxSet, WeightUnit, WorkoutStatus};

#[test]
fn test_enum_wire_names() {
    assert_eq!(
        serde_json::to_value(Movement::OverheadPress).unwrap(),
        json!("overhead_press")
    );
    assert_eq!(
        serde_json::to_value(WorkoutStatus::NotStarted).unwrap(),
        json!("not-started")
    );
    assert_eq!(serde_json::to_value(WeightUnit::Kilograms).unwrap(), json!("kg"));
    assert_eq!(
        serde_json::to_value(TargetReps::Amrap { minimum: 3 }).unwrap(),
        json!({"kind": "amrap", "minimum": 3})
    );
}

#[test]
fn test_unknown_status_is_rejected() {
    let result: Result<WorkoutStatus, _> = serde_json::from_value(json!("abandoned"));
    assert!(result.is_err());
}

#[test]
fn test_stored_cycle_loads_back() {
    let cycle = common::cycle();
    let json = serde_json::to_string_pretty(&cycle).unwrap();
    let loaded: Cycle = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, cycle);

    let value = serde_json::to_value(&cycle).unwrap();
    assert_eq!(value["cycle_number"], json!(1));
    assert_eq!(value["start_date"], json!("2025-01-06"));
    assert_eq!(value["workouts"][0]["status"], json!("not-started"));
    assert_eq!(value["week_dates"][0]["start_label"], json!("Jan 06"));
    assert!(value["workouts"][0].get("actuals").is_none());
}

#[test]
fn test_non_positive_training_max_is_rejected_on_load() {
    let result: Result<TrainingMaxSet, _> = serde_json::from_value(json!({
        "unit": "lbs",
        "maxes": {"squat": 300.0, "bench": -5.0}
    }));
    assert!(result.is_err());
}

#[test]
fn test_error_response_shape() {
    let response = ErrorResponse::from(ProgramError::InvalidTransition {
        from: WorkoutStatus::Completed,
        to: WorkoutStatus::InProgress,
    });
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["code"], json!("INVALID_TRANSITION"));
    assert_eq!(
        value["message"],
        json!("Invalid status transition from completed to in-progress")
    );
    assert_eq!(value["retryable"], json!(false));
    assert_eq!(response.code.http_status(), 409);
}
