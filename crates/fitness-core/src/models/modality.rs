// ABOUTME: Workout modality enumeration keyed by sensor package type tags
// ABOUTME: Maps SWM/RUN/WLK tags to modalities with names, arity, and step lengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{running, swimming, walking};
use crate::errors::WorkoutError;

/// The closed set of workout kinds a sensor package can describe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutModality {
    /// Running, tagged `RUN`
    Running,
    /// Sports walking, tagged `WLK`
    SportsWalking,
    /// Pool swimming, tagged `SWM`
    Swimming,
}

impl WorkoutModality {
    /// Every modality, in dispatch-table order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Resolve a sensor package type tag
    ///
    /// Tags are matched exactly; `run` is not `RUN`.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::UnknownModality` for any tag other than
    /// `SWM`, `RUN`, or `WLK`
    pub fn from_tag(tag: &str) -> Result<Self, WorkoutError> {
        match tag {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(WorkoutError::unknown_modality(other)),
        }
    }

    /// Sensor package type tag
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Name reported in workout summaries
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional values a sensor package must carry
    ///
    /// Order: action, duration, weight, then height (walking) or
    /// pool length and pool count (swimming).
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Distance covered by one action, in meters
    #[must_use]
    pub const fn step_length_m(&self) -> f64 {
        match self {
            Self::Running => running::LEN_STEP_M,
            Self::SportsWalking => walking::LEN_STEP_M,
            Self::Swimming => swimming::LEN_STEP_M,
        }
    }
}

impl fmt::Display for WorkoutModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutModality {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}
