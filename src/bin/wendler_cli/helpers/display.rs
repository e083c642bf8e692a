// ABOUTME: Output formatting helpers for wendler-cli
// ABOUTME: Renders cycles, summaries, and save results as JSON or plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use wendler_tracker::errors::{ErrorResponse, ProgramError};
use wendler_tracker::models::{Cycle, SetType, WorkoutPlan};
use wendler_tracker::programming::schedule::week_label;
use wendler_tracker::programming::summary::CycleSummary;
use wendler_tracker::services::SaveOutcome;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a whole cycle
pub fn print_cycle(cycle: &Cycle, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(cycle);
    }

    let unit = cycle.training_maxes.unit();
    println!(
        "\nCycle {} ({unit}), starting {}",
        cycle.cycle_number, cycle.start_date
    );
    println!("{}", "=".repeat(60));
    let maxes: Vec<String> = cycle
        .training_maxes
        .iter()
        .map(|(movement, training_max)| format!("{} {training_max}", movement.display_name()))
        .collect();
    println!("Training maxes: {}", maxes.join(", "));

    for range in &cycle.week_dates {
        println!(
            "\nWeek {} - {} ({} - {})",
            range.week,
            week_label(range.week)?,
            range.start_label,
            range.end_label
        );
        println!("{}", "-".repeat(60));
        for workout in cycle.week_workouts(range.week) {
            print_workout(workout, unit.as_str());
        }
    }
    Ok(())
}

fn print_workout(workout: &WorkoutPlan, unit: &str) {
    println!("  Day {} [{}]", workout.day, workout.status);
    for &movement in &workout.movements {
        println!("    {}", movement.display_name());
        let Some(sets) = workout.sets_for(movement) else {
            continue;
        };
        let actuals = workout.actuals_for(movement).unwrap_or_default();
        for (index, set) in sets.iter().enumerate() {
            let kind = match set.set_type {
                SetType::Warmup => "warm-up",
                SetType::Working => "working",
            };
            let logged = actuals
                .get(index)
                .and_then(|actual| actual.completed_reps)
                .map_or_else(String::new, |reps| {
                    let short = if reps < set.target_reps.minimum() { " (short)" } else { "" };
                    format!("  done: {reps}{short}")
                });
            println!(
                "      {kind:<8} {:>3.0}%  x{:<3} {:>6} {unit}{logged}",
                set.percentage * 100.0,
                set.target_reps.to_string(),
                set.computed_weight
            );
        }
    }
}

/// Print a cycle summary
pub fn print_summary(summary: &CycleSummary, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(summary);
    }

    println!("\nCycle {} progress", summary.cycle_number);
    println!("{}", "=".repeat(40));
    println!(
        "   Completed: {}/{} ({:.0}%)",
        summary.completed_workouts, summary.total_workouts, summary.completion_percentage
    );
    println!("   Finished (incl. DNF/skipped): {}", summary.terminal_workouts);
    println!(
        "   Current week: {}{}",
        summary.current_week,
        if summary.is_deload_week { " (deload)" } else { "" }
    );
    println!(
        "   Ready for next cycle: {}",
        if summary.ready_for_next_cycle { "yes" } else { "no" }
    );
    Ok(())
}

/// Print the result of saving a workout
pub fn print_outcome(outcome: &SaveOutcome, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(outcome);
    }

    if outcome.status_changed() {
        println!("Workout {} -> {}", outcome.previous_status, outcome.status);
    } else {
        println!("Workout remains {}", outcome.status);
    }
    if outcome.is_complete {
        println!("Every movement has its final set logged.");
    }
    Ok(())
}

/// Print a command failure on stderr
///
/// Engine validation errors are printed with their stable code in JSON mode.
pub fn report_error(error: &anyhow::Error, format: OutputFormat) {
    match (format, error.downcast_ref::<ProgramError>()) {
        (OutputFormat::Json, Some(program_error)) => {
            let response = ErrorResponse::from(program_error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("Error: {error:#}"),
            }
        }
        _ => eprintln!("Error: {error:#}"),
    }
}
