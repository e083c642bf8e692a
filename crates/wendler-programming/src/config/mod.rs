// ABOUTME: Program configuration - rounding increments, warm-ups, progression, training max percentage
// ABOUTME: Defaults, environment overrides, and validation for the generation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Program Configuration
//!
//! The engine never reads hidden global state: every generator receives a
//! [`ProgramConfig`] explicitly. This keeps results reproducible across unit
//! systems and gyms with different plate sets.
//!
//! Loading follows three steps: defaults, environment overrides, validation.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use wendler_core::constants::{progression, rounding, training_max};
use wendler_core::models::WeightUnit;

/// How a raw percentage weight snaps to a loadable increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Nearest increment, halfway cases away from zero
    #[default]
    Nearest,
    /// Largest increment not above the raw weight
    Down,
    /// Smallest increment not below the raw weight
    Up,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nearest => "nearest",
            Self::Down => "down",
            Self::Up => "up",
        })
    }
}

impl FromStr for RoundingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "down" | "floor" => Ok(Self::Down),
            "up" | "ceil" => Ok(Self::Up),
            other => Err(ConfigError::Parse(format!(
                "unknown rounding mode '{other}'"
            ))),
        }
    }
}

/// Plate rounding policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundingConfig {
    /// Loadable increment for pound plates
    pub pounds_increment: f64,
    /// Loadable increment for kilogram plates
    pub kilograms_increment: f64,
    /// Rounding direction
    pub mode: RoundingMode,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            pounds_increment: rounding::DEFAULT_POUNDS_INCREMENT,
            kilograms_increment: rounding::DEFAULT_KILOGRAMS_INCREMENT,
            mode: RoundingMode::Nearest,
        }
    }
}

impl RoundingConfig {
    /// Loadable increment for a unit
    #[must_use]
    pub const fn increment(&self, unit: WeightUnit) -> f64 {
        match unit {
            WeightUnit::Pounds => self.pounds_increment,
            WeightUnit::Kilograms => self.kilograms_increment,
        }
    }
}

/// One warm-up set template, as a whole percentage of the training max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupSet {
    /// Percentage of training max, 1-100
    pub percent: u8,
    /// Fixed rep count
    pub reps: u32,
}

/// Warm-up sets prepended to every workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupConfig {
    /// Whether warm-ups are generated at all
    pub enabled: bool,
    /// Warm-up templates in ascending percentage order
    pub sets: Vec<WarmupSet>,
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sets: vec![
                WarmupSet { percent: 40, reps: 5 },
                WarmupSet { percent: 50, reps: 5 },
                WarmupSet { percent: 60, reps: 3 },
            ],
        }
    }
}

/// Training max increase applied between cycles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Increase for bench and overhead press
    pub upper_body_increment: f64,
    /// Increase for squat and deadlift
    pub lower_body_increment: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            upper_body_increment: progression::DEFAULT_UPPER_BODY_INCREMENT,
            lower_body_increment: progression::DEFAULT_LOWER_BODY_INCREMENT,
        }
    }
}

impl ProgressionConfig {
    /// Increments suited to kilogram plates (2.5 kg upper, 5 kg lower)
    #[must_use]
    pub const fn kilograms() -> Self {
        Self {
            upper_body_increment: progression::KILOGRAMS_UPPER_BODY_INCREMENT,
            lower_body_increment: progression::KILOGRAMS_LOWER_BODY_INCREMENT,
        }
    }
}

/// Complete configuration of the generation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Plate rounding policy
    pub rounding: RoundingConfig,
    /// Warm-up set templates
    pub warmups: WarmupConfig,
    /// Cycle-to-cycle progression increments
    pub progression: ProgressionConfig,
    /// Training max as a whole percentage of the one-rep max
    pub training_max_percent: u8,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingConfig::default(),
            warmups: WarmupConfig::default(),
            progression: ProgressionConfig::default(),
            training_max_percent: training_max::DEFAULT_PERCENT_OF_ONE_REP_MAX,
        }
    }
}

impl ProgramConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !positive(self.rounding.pounds_increment) {
            return Err(ConfigError::ValueOutOfRange(
                "rounding.pounds_increment must be positive",
            ));
        }
        if !positive(self.rounding.kilograms_increment) {
            return Err(ConfigError::ValueOutOfRange(
                "rounding.kilograms_increment must be positive",
            ));
        }
        if !positive(self.progression.upper_body_increment) {
            return Err(ConfigError::ValueOutOfRange(
                "progression.upper_body_increment must be positive",
            ));
        }
        if !positive(self.progression.lower_body_increment) {
            return Err(ConfigError::ValueOutOfRange(
                "progression.lower_body_increment must be positive",
            ));
        }

        if !(training_max::MIN_PERCENT_OF_ONE_REP_MAX..=training_max::MAX_PERCENT_OF_ONE_REP_MAX)
            .contains(&self.training_max_percent)
        {
            return Err(ConfigError::ValueOutOfRange(
                "training_max_percent must be between 50 and 100",
            ));
        }

        if self
            .warmups
            .sets
            .iter()
            .any(|set| set.percent == 0 || set.percent > 100 || set.reps == 0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "warm-up sets need a percentage of 1-100 and at least one rep",
            ));
        }
        if self
            .warmups
            .sets
            .windows(2)
            .any(|pair| pair[0].percent >= pair[1].percent)
        {
            return Err(ConfigError::InvalidRange(
                "warm-up percentages must be strictly ascending",
            ));
        }

        Ok(())
    }

    /// Apply a single environment variable override if set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "WENDLER_ROUNDING_LBS_INCREMENT",
            &mut self.rounding.pounds_increment,
        )?;
        Self::apply_env_var(
            "WENDLER_ROUNDING_KG_INCREMENT",
            &mut self.rounding.kilograms_increment,
        )?;
        Self::apply_env_var("WENDLER_ROUNDING_MODE", &mut self.rounding.mode)?;
        Self::apply_env_var("WENDLER_WARMUPS_ENABLED", &mut self.warmups.enabled)?;
        Self::apply_env_var(
            "WENDLER_PROGRESSION_UPPER_INCREMENT",
            &mut self.progression.upper_body_increment,
        )?;
        Self::apply_env_var(
            "WENDLER_PROGRESSION_LOWER_INCREMENT",
            &mut self.progression.lower_body_increment,
        )?;
        Self::apply_env_var(
            "WENDLER_TRAINING_MAX_PERCENT",
            &mut self.training_max_percent,
        )?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: [&str; 3] = [
        "WENDLER_ROUNDING_KG_INCREMENT",
        "WENDLER_ROUNDING_MODE",
        "WENDLER_TRAINING_MAX_PERCENT",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ProgramConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_increment() {
        let mut config = ProgramConfig::default();
        config.rounding.kilograms_increment = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_unordered_warmups() {
        let mut config = ProgramConfig::default();
        config.warmups.sets = vec![
            WarmupSet { percent: 60, reps: 3 },
            WarmupSet { percent: 40, reps: 5 },
        ];
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides_apply() {
        clear_env();
        env::set_var("WENDLER_ROUNDING_KG_INCREMENT", "1.25");
        env::set_var("WENDLER_ROUNDING_MODE", "down");
        env::set_var("WENDLER_TRAINING_MAX_PERCENT", "85");

        let config = ProgramConfig::load().unwrap();
        clear_env();

        assert!((config.rounding.kilograms_increment - 1.25).abs() < f64::EPSILON);
        assert_eq!(config.rounding.mode, RoundingMode::Down);
        assert_eq!(config.training_max_percent, 85);
    }

    #[test]
    #[serial]
    fn test_env_parse_failure_is_reported() {
        clear_env();
        env::set_var("WENDLER_ROUNDING_MODE", "sideways");

        let result = ProgramConfig::load();
        clear_env();

        assert_eq!(
            result,
            Err(ConfigError::Parse(
                "Invalid WENDLER_ROUNDING_MODE".to_owned()
            ))
        );
    }

    #[test]
    #[serial]
    fn test_env_values_are_validated() {
        clear_env();
        env::set_var("WENDLER_TRAINING_MAX_PERCENT", "120");

        let result = ProgramConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }
}
