// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for cycle shape, default increments, and naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Defaults live here so that the configuration layer and the tests agree on
//! one set of numbers. None of these are read by the engine directly: the
//! engine always receives an explicit `ProgramConfig`.

/// Shape of a single training cycle
pub mod cycle {
    /// Number of weeks in one cycle (three loading weeks plus a deload)
    pub const WEEKS_PER_CYCLE: u8 = 4;
    /// Training days per week in the standard two-day split
    pub const DAYS_PER_WEEK: u8 = 2;
    /// Movements trained on each training day
    pub const MOVEMENTS_PER_DAY: usize = 2;
    /// Week number of the deload week
    pub const DELOAD_WEEK: u8 = 4;
    /// Days in a calendar week, used for week date ranges
    pub const DAYS_PER_CALENDAR_WEEK: i64 = 7;
    /// First cycle number issued to a new lifter
    pub const FIRST_CYCLE_NUMBER: std::num::NonZeroU32 = std::num::NonZeroU32::MIN;
}

/// Training max derivation
pub mod training_max {
    /// Default training max as a percentage of the one-rep max
    pub const DEFAULT_PERCENT_OF_ONE_REP_MAX: u8 = 90;
    /// Lowest accepted training max percentage
    pub const MIN_PERCENT_OF_ONE_REP_MAX: u8 = 50;
    /// Highest accepted training max percentage
    pub const MAX_PERCENT_OF_ONE_REP_MAX: u8 = 100;
}

/// Plate rounding increments
pub mod rounding {
    /// Smallest practical jump with standard pound plates (2 x 2.5 lb)
    pub const DEFAULT_POUNDS_INCREMENT: f64 = 5.0;
    /// Smallest practical jump with standard kilogram plates (2 x 1.25 kg)
    pub const DEFAULT_KILOGRAMS_INCREMENT: f64 = 2.5;
}

/// Cycle-to-cycle progression
pub mod progression {
    /// Default upper body training max increase per cycle (pounds)
    pub const DEFAULT_UPPER_BODY_INCREMENT: f64 = 5.0;
    /// Default lower body training max increase per cycle (pounds)
    pub const DEFAULT_LOWER_BODY_INCREMENT: f64 = 10.0;
    /// Metric upper body training max increase per cycle (kilograms)
    pub const KILOGRAMS_UPPER_BODY_INCREMENT: f64 = 2.5;
    /// Metric lower body training max increase per cycle (kilograms)
    pub const KILOGRAMS_LOWER_BODY_INCREMENT: f64 = 5.0;
}

/// Service names used in structured logging
pub mod service_names {
    /// Name reported by the tracker binaries
    pub const WENDLER_TRACKER: &str = "wendler-tracker";
}

/// Display formats
pub mod formats {
    /// Short week label format, e.g. "Jan 06"
    pub const WEEK_LABEL_DATE_FORMAT: &str = "%b %d";
}
