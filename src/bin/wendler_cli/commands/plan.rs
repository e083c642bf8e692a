// ABOUTME: Plan command for wendler-cli
// ABOUTME: Builds the first cycle from one-rep maxes and a two-day split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use tracing::info;
use wendler_tracker::models::{Movement, OneRepMaxSet, WeightUnit};
use wendler_tracker::services::TrainingService;

use crate::helpers::display::{print_cycle, OutputFormat};
use crate::helpers::files::{today, write_cycle};

/// Arguments of `wendler-cli plan`
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Squat one-rep max
    #[arg(long)]
    pub squat: f64,

    /// Bench press one-rep max
    #[arg(long)]
    pub bench: f64,

    /// Deadlift one-rep max
    #[arg(long)]
    pub deadlift: f64,

    /// Overhead press one-rep max
    #[arg(long)]
    pub overhead_press: f64,

    /// Unit of the maxes (lbs or kg)
    #[arg(long, default_value_t = WeightUnit::Pounds)]
    pub unit: WeightUnit,

    /// Day 1 movements, comma-separated
    #[arg(long, value_delimiter = ',', default_values_t = [Movement::Squat, Movement::Bench])]
    pub day1: Vec<Movement>,

    /// Day 2 movements, comma-separated
    #[arg(long, value_delimiter = ',', default_values_t = [Movement::Deadlift, Movement::OverheadPress])]
    pub day2: Vec<Movement>,

    /// First day of week 1 (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Also save the cycle JSON to this file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Plan and print the first cycle
pub fn run(service: &TrainingService, args: &PlanArgs, format: OutputFormat) -> Result<()> {
    let one_rep_maxes = OneRepMaxSet::new(
        args.unit,
        args.squat,
        args.bench,
        args.deadlift,
        args.overhead_press,
    )?;
    let start_date = args.start.unwrap_or_else(today);

    let cycle = service.onboard(&one_rep_maxes, &args.day1, &args.day2, start_date)?;
    info!(start = %start_date, unit = %args.unit, "Planned first cycle");

    if let Some(path) = &args.output {
        write_cycle(path, &cycle)?;
    }
    print_cycle(&cycle, format)
}
