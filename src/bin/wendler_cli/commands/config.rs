// ABOUTME: Config command for wendler-cli
// ABOUTME: Prints the configuration loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use wendler_tracker::config::AppConfig;

use crate::helpers::display::{print_json, OutputFormat};

/// Print the effective configuration
pub fn show(config: &AppConfig, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&config.summary());
    }

    let program = &config.program;
    println!("\nConfiguration");
    println!("{}", "=".repeat(40));
    println!(
        "   Rounding: {} lbs / {} kg ({})",
        program.rounding.pounds_increment, program.rounding.kilograms_increment, program.rounding.mode
    );
    println!(
        "   Warm-ups: {}",
        if program.warmups.enabled {
            program
                .warmups
                .sets
                .iter()
                .map(|set| format!("{}%x{}", set.percent, set.reps))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            "disabled".to_owned()
        }
    );
    println!(
        "   Progression: +{} upper body, +{} lower body",
        program.progression.upper_body_increment, program.progression.lower_body_increment
    );
    println!("   Training max: {}% of one-rep max", program.training_max_percent);
    println!(
        "   Logging: {} ({})",
        config.logging.level, config.logging.environment
    );
    Ok(())
}
