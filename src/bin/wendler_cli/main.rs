// ABOUTME: Wendler CLI - plans 5/3/1 cycles and tracks workouts stored as JSON files
// ABOUTME: Handles planning, logging, status changes, summaries, and next-cycle creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan a first cycle from one-rep maxes
//! wendler-cli plan --squat 315 --bench 225 --deadlift 405 --overhead-press 135 \
//!     --start 2025-01-06 --output cycle.json
//!
//! # Log the bench sets of week 1, day 1
//! wendler-cli log --cycle cycle.json --week 1 --day 1 --movement bench --reps 5,5,5,5,5,9
//!
//! # Skip a workout
//! wendler-cli status --cycle cycle.json --week 1 --day 2 --to skipped
//!
//! # Show progress, then build the next cycle once everything is finished
//! wendler-cli summary --cycle cycle.json
//! wendler-cli next --cycle cycle.json --output cycle2.json
//!
//! # Check whether a status change is allowed
//! wendler-cli transition --from completed --to in-progress
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use wendler_tracker::config::AppConfig;
use wendler_tracker::services::TrainingService;

use commands::cycle::{LogArgs, NextArgs, StatusArgs};
use commands::plan::PlanArgs;
use helpers::display::{report_error, OutputFormat};

#[derive(Parser)]
#[command(
    name = "wendler-cli",
    about = "Wendler 5/3/1 cycle planner",
    long_about = "Plans four-week Wendler 5/3/1 cycles from one-rep maxes and tracks workouts stored as JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Plan the first cycle from one-rep maxes
    Plan(PlanArgs),

    /// Build the next cycle from a finished one
    Next(NextArgs),

    /// Show a cycle's progress
    Summary {
        /// Cycle JSON file
        #[arg(long)]
        cycle: std::path::PathBuf,
    },

    /// Record the sets of one movement; completes the workout when every movement is logged
    Log(LogArgs),

    /// Change the status of one workout
    Status(StatusArgs),

    /// Check whether a status change is allowed
    Transition {
        /// Current status
        #[arg(long)]
        from: wendler_tracker::models::WorkoutStatus,

        /// Requested status
        #[arg(long)]
        to: wendler_tracker::models::WorkoutStatus,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;
    debug!(command = command_name(&cli.command), "Running command");

    let service = TrainingService::new(config.program.clone())?;
    let format = cli.format;

    match cli.command {
        Command::Plan(args) => commands::plan::run(&service, &args, format),
        Command::Next(args) => commands::cycle::next(&service, &args, format),
        Command::Summary { cycle } => commands::cycle::summary(&cycle, format),
        Command::Log(args) => commands::cycle::log(&service, &args, format),
        Command::Status(args) => commands::cycle::status(&service, &args, format),
        Command::Transition { from, to } => commands::transition::check(from, to, format),
        Command::Config => commands::config::show(&config, format),
    }
}

const fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Plan(_) => "plan",
        Command::Next(_) => "next",
        Command::Summary { .. } => "summary",
        Command::Log(_) => "log",
        Command::Status(_) => "status",
        Command::Transition { .. } => "transition",
        Command::Config => "config",
    }
}
