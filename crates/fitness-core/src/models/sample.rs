// ABOUTME: Validated raw workout sample attributes shared by every modality
// ABOUTME: Enforces positive duration and weight plus integral, non-negative counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::errors::WorkoutError;

/// Raw attributes common to every workout sample
///
/// `action_count` is steps for running and walking, strokes for swimming.
/// Once built, a sample is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutSample {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutSample {
    /// Build a sample, rejecting values the metric formulas cannot divide by
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::InvalidSample` if `duration_hours` or
    /// `weight_kg` is not a finite, strictly positive number
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count,
            duration_hours: positive_field("duration", duration_hours)?,
            weight_kg: positive_field("weight", weight_kg)?,
        })
    }

    /// Steps or strokes recorded by the sensor
    #[must_use]
    pub const fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Workout duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Check that a value is finite and strictly positive
///
/// # Errors
///
/// Returns `WorkoutError::InvalidSample` naming `field` otherwise
pub fn positive_field(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::invalid_sample(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(WorkoutError::invalid_sample(
            field,
            value,
            "must be greater than zero",
        ));
    }
    Ok(value)
}

/// Convert a positional number into a count
///
/// The value must be a finite, non-negative whole number that fits in `u32`.
///
/// # Errors
///
/// Returns `WorkoutError::InvalidSample` naming `field` otherwise
pub fn count_field(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::invalid_sample(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(WorkoutError::invalid_sample(
            field,
            value,
            "must not be negative",
        ));
    }
    if value.fract() != 0.0 {
        return Err(WorkoutError::invalid_sample(
            field,
            value,
            "must be a whole number",
        ));
    }
    if value > f64::from(u32::MAX) {
        return Err(WorkoutError::invalid_sample(field, value, "is too large"));
    }
    Ok(value as u32)
}
