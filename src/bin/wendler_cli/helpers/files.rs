// ABOUTME: Cycle file helpers for wendler-cli
// ABOUTME: Reads, shape-checks, and writes cycles as pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tracing::debug;
use wendler_tracker::models::Cycle;
use wendler_tracker::programming::cycle_generator::validate_cycle;

/// Load a cycle from a JSON file and check its shape
pub fn read_cycle(path: &Path) -> Result<Cycle> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cycle file {}", path.display()))?;
    let cycle: Cycle = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid cycle JSON in {}", path.display()))?;
    validate_cycle(&cycle)
        .with_context(|| format!("Malformed cycle in {}", path.display()))?;
    debug!(path = %path.display(), "Loaded cycle");
    Ok(cycle)
}

/// Save a cycle as pretty-printed JSON
pub fn write_cycle(path: &Path, cycle: &Cycle) -> Result<()> {
    let json = serde_json::to_string_pretty(cycle)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write cycle file {}", path.display()))?;
    debug!(path = %path.display(), cycle.number = cycle.cycle_number.get(), "Saved cycle");
    Ok(())
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
