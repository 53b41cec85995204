// ABOUTME: Derived workout metrics reported once per sensor package
// ABOUTME: Renders the fixed informational message with three-decimal precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-reportable metrics for one workout sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Modality name, e.g. `Running`
    pub modality_name: String,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in kilometers per hour
    pub mean_speed_kmh: f64,
    /// Energy spent in kilocalories
    pub calories_burned: f64,
}

impl WorkoutSummary {
    /// Informational message for this workout, every float to three decimals
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.modality_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_burned,
        )
    }
}
