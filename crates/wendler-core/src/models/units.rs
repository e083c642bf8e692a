// ABOUTME: Weight unit enumeration (pounds or kilograms)
// ABOUTME: Serialized as "lbs"/"kg" to match what lifters type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseValueError;

/// Unit every weight of a training max set is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Pounds
    #[default]
    #[serde(rename = "lbs")]
    Pounds,
    /// Kilograms
    #[serde(rename = "kg")]
    Kilograms,
}

impl WeightUnit {
    /// Short label used on the wire and in tables
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pounds => "lbs",
            Self::Kilograms => "kg",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lbs" | "lb" | "pounds" => Ok(Self::Pounds),
            "kg" | "kgs" | "kilograms" => Ok(Self::Kilograms),
            _ => Err(ParseValueError {
                kind: "weight unit",
                value: s.to_owned(),
                expected: "lbs, kg",
            }),
        }
    }
}
