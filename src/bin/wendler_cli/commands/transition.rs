// ABOUTME: Transition command for wendler-cli
// ABOUTME: Reports whether a workout status change is allowed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use serde_json::json;
use wendler_tracker::models::WorkoutStatus;
use wendler_tracker::programming::status::transition;

use crate::helpers::display::{print_json, OutputFormat};

/// Validate `from -> to`; an invalid change is returned as the command's error
pub fn check(from: WorkoutStatus, to: WorkoutStatus, format: OutputFormat) -> Result<()> {
    let status = transition(from, to)?;
    match format {
        OutputFormat::Json => print_json(&json!({ "from": from, "to": status, "allowed": true })),
        OutputFormat::Text => {
            println!("{from} -> {status}: allowed");
            Ok(())
        }
    }
}
