// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Provides standard training maxes, day splits, cycles, and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `wendler_tracker`

use std::num::NonZeroU32;
use std::sync::Once;

use chrono::NaiveDate;
use wendler_tracker::models::{Cycle, Movement, OneRepMaxSet, TrainingMaxSet, WeightUnit};
use wendler_tracker::programming::config::ProgramConfig;
use wendler_tracker::programming::cycle_generator::CycleGenerator;
use wendler_tracker::services::TrainingService;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

pub const DAY1: [Movement; 2] = [Movement::Squat, Movement::Bench];
pub const DAY2: [Movement; 2] = [Movement::Deadlift, Movement::OverheadPress];

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

/// Training maxes used across the progression examples
pub fn training_maxes() -> TrainingMaxSet {
    TrainingMaxSet::from_maxes(
        WeightUnit::Pounds,
        [
            (Movement::Squat, 300.0),
            (Movement::Bench, 200.0),
            (Movement::Deadlift, 350.0),
            (Movement::OverheadPress, 140.0),
        ],
    )
    .unwrap()
}

pub fn one_rep_maxes() -> OneRepMaxSet {
    OneRepMaxSet::new(WeightUnit::Pounds, 315.0, 225.0, 405.0, 135.0).unwrap()
}

pub fn service() -> TrainingService {
    TrainingService::new(ProgramConfig::default()).unwrap()
}

/// Cycle 1 built straight from [`training_maxes`]
pub fn cycle() -> Cycle {
    CycleGenerator::new(&ProgramConfig::default())
        .create_cycle(&training_maxes(), &DAY1, &DAY2, start_date(), NonZeroU32::MIN)
        .unwrap()
}
