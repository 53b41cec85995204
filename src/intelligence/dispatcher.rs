// ABOUTME: Sensor package dispatcher selecting a workout calculator from a type tag
// ABOUTME: Binds positional values to named fields after checking arity and ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sensor Package Dispatch
//!
//! A sensor package is a type tag plus an ordered list of numbers. The
//! dispatcher resolves the tag to a [`WorkoutModality`], checks that the list
//! has exactly the values that modality needs, and builds the calculator.
//! Every failure is reported before a calculator exists.
//!
//! | Tag   | Values                                             |
//! |-------|----------------------------------------------------|
//! | `RUN` | action, duration, weight                           |
//! | `WLK` | action, duration, weight, height                   |
//! | `SWM` | action, duration, weight, pool length, pool count  |

use fitness_core::errors::WorkoutError;
use fitness_core::models::{count_field, WorkoutModality, WorkoutSample};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::training::{Running, SportsWalking, Swimming, Workout};

/// One raw record received from a workout sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Short type tag (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Positional values in modality order
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a tag and its values
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Dispatch this package to its calculator
    ///
    /// # Errors
    ///
    /// See [`read_package`]
    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Build the calculator for a sensor package
///
/// # Errors
///
/// - `WorkoutError::UnknownModality` if `workout_type` is not `SWM`, `RUN`, or `WLK`
/// - `WorkoutError::ArityMismatch` if `data` has the wrong number of values
/// - `WorkoutError::InvalidSample` if a value is out of range
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let result =
        WorkoutModality::from_tag(workout_type).and_then(|modality| build(modality, data));

    match &result {
        Ok(workout) => debug!(
            workout.tag = workout_type,
            workout.values = data.len(),
            "Sensor package accepted as {:?}",
            workout
        ),
        Err(error) => warn!(
            workout.tag = workout_type,
            workout.values = data.len(),
            error.code = %error.code(),
            "Sensor package rejected: {error}"
        ),
    }

    result
}

fn build(modality: WorkoutModality, data: &[f64]) -> Result<Workout, WorkoutError> {
    let workout: Workout = match (modality, data) {
        (WorkoutModality::Running, &[action, duration, weight]) => {
            Running::new(base_sample(action, duration, weight)?).into()
        }
        (WorkoutModality::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(base_sample(action, duration, weight)?, height)?.into()
        }
        (WorkoutModality::Swimming, &[action, duration, weight, pool_length, pool_count]) => {
            Swimming::new(
                base_sample(action, duration, weight)?,
                pool_length,
                count_field("pool count", pool_count)?,
            )?
            .into()
        }
        _ => {
            return Err(WorkoutError::arity_mismatch(
                modality.name(),
                modality.arity(),
                data.len(),
            ))
        }
    };

    Ok(workout)
}

fn base_sample(action: f64, duration: f64, weight: f64) -> Result<WorkoutSample, WorkoutError> {
    WorkoutSample::new(count_field("action", action)?, duration, weight)
}
