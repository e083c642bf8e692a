// ABOUTME: Application configuration combining engine settings and logging
// ABOUTME: Loads everything from the environment in one validated step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use wendler_programming::config::{ConfigError, ProgramConfig};

use crate::logging::LoggingConfig;

/// Everything the tracker reads from its environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Engine configuration
    pub program: ProgramConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and validate configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an engine override is unparsable or out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            program: ProgramConfig::load()?,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Serializable view of the engine settings, for diagnostics
    #[must_use]
    pub fn summary(&self) -> ConfigSummary<'_> {
        ConfigSummary {
            program: &self.program,
            log_level: &self.logging.level,
            environment: &self.logging.environment,
        }
    }
}

/// Diagnostic snapshot of the loaded configuration
#[derive(Debug, Serialize)]
pub struct ConfigSummary<'a> {
    /// Engine settings
    pub program: &'a ProgramConfig,
    /// Active log level
    pub log_level: &'a str,
    /// Deployment environment
    pub environment: &'a str,
}
