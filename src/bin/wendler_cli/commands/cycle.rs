// ABOUTME: Cycle file commands for wendler-cli
// ABOUTME: Logs sets, changes statuses, summarizes, and creates the next cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate, Utc};
use clap::Args;
use tracing::info;
use wendler_tracker::constants::cycle::WEEKS_PER_CYCLE;
use wendler_tracker::models::{Cycle, Movement, SetActual, WorkoutStatus};
use wendler_tracker::programming::summary::summarize;
use wendler_tracker::services::TrainingService;

use crate::helpers::display::{print_cycle, print_outcome, print_summary, OutputFormat};
use crate::helpers::files::{read_cycle, write_cycle};

/// Arguments of `wendler-cli next`
#[derive(Debug, Args)]
pub struct NextArgs {
    /// Finished cycle JSON file, rewritten with the cycle marked inactive
    #[arg(long)]
    pub cycle: PathBuf,

    /// First day of the new cycle, defaults to the day after the current one ends
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// File for the new cycle JSON, defaults to `cycle-<number>.json` next to `--cycle`
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments of `wendler-cli log`
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Cycle JSON file, updated in place
    #[arg(long)]
    pub cycle: PathBuf,

    /// Week of the workout (1-4)
    #[arg(long)]
    pub week: u8,

    /// Day of the workout (1-2)
    #[arg(long)]
    pub day: u8,

    /// Movement the sets belong to
    #[arg(long)]
    pub movement: Movement,

    /// Reps completed per set in prescription order, comma-separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub reps: Vec<u32>,
}

/// Arguments of `wendler-cli status`
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Cycle JSON file, updated in place
    #[arg(long)]
    pub cycle: PathBuf,

    /// Week of the workout (1-4)
    #[arg(long)]
    pub week: u8,

    /// Day of the workout (1-2)
    #[arg(long)]
    pub day: u8,

    /// Requested status
    #[arg(long)]
    pub to: WorkoutStatus,
}

fn default_next_start(cycle: &Cycle) -> NaiveDate {
    cycle
        .week_range(WEEKS_PER_CYCLE)
        .map_or(cycle.start_date, |range| range.end_date)
        + Duration::days(1)
}

fn next_cycle_path(args: &NextArgs, next: &Cycle) -> PathBuf {
    args.output.clone().unwrap_or_else(|| {
        args.cycle
            .with_file_name(format!("cycle-{}.json", next.cycle_number))
    })
}

/// Build, save, and print the next cycle
///
/// The new cycle is written before the current file is rewritten as
/// inactive, so a failed write never leaves the lifter without an active cycle.
pub fn next(service: &TrainingService, args: &NextArgs, format: OutputFormat) -> Result<()> {
    let mut current = read_cycle(&args.cycle)?;
    let start_date = args.start.unwrap_or_else(|| default_next_start(&current));

    let next = service.create_next_cycle(&mut current, start_date)?;
    let output = next_cycle_path(args, &next);
    if output == args.cycle {
        bail!(
            "Refusing to overwrite {} with the next cycle; pass a different --output",
            args.cycle.display()
        );
    }

    write_cycle(&output, &next)?;
    write_cycle(&args.cycle, &current)?;
    info!(
        cycle.number = next.cycle_number.get(),
        start = %start_date,
        path = %output.display(),
        "Created next cycle"
    );
    print_cycle(&next, format)
}

/// Print a cycle's progress
pub fn summary(path: &Path, format: OutputFormat) -> Result<()> {
    let cycle = read_cycle(path)?;
    print_summary(&summarize(&cycle), format)
}

/// Record one movement's sets and save the cycle
pub fn log(service: &TrainingService, args: &LogArgs, format: OutputFormat) -> Result<()> {
    let mut cycle = read_cycle(&args.cycle)?;
    let actuals = BTreeMap::from([(
        args.movement,
        args.reps.iter().copied().map(SetActual::reps).collect(),
    )]);

    let outcome = service.save_workout(&mut cycle, args.week, args.day, actuals, Utc::now())?;
    write_cycle(&args.cycle, &cycle)?;
    print_outcome(&outcome, format)
}

/// Change one workout's status and save the cycle
pub fn status(service: &TrainingService, args: &StatusArgs, format: OutputFormat) -> Result<()> {
    let mut cycle = read_cycle(&args.cycle)?;
    let previous = cycle
        .workout(args.week, args.day)
        .map(|workout| workout.status);

    let status = service.set_status(&mut cycle, args.week, args.day, args.to, Utc::now())?;
    write_cycle(&args.cycle, &cycle)?;

    match format {
        OutputFormat::Json => crate::helpers::display::print_json(&serde_json::json!({
            "week": args.week,
            "day": args.day,
            "previous_status": previous,
            "status": status,
        })),
        OutputFormat::Text => {
            println!("Week {} day {} is now {status}", args.week, args.day);
            Ok(())
        }
    }
}
