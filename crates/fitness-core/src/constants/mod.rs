// ABOUTME: Fixed protocol constants for workout metric calculations
// ABOUTME: Unit conversions, per-modality step lengths, and calorie formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Protocol constants shared by the workout calculators.
//!
//! These values are part of the calculation protocol, not configuration:
//! changing any of them changes every reported distance, speed, and calorie
//! figure.

/// Unit conversions shared by every modality
pub mod units {
    /// Meters in one kilometer
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MIN_IN_H: f64 = 60.0;
}

/// Running constants
pub mod running {
    /// Distance covered by one step, in meters
    pub const LEN_STEP_M: f64 = 0.65;

    /// Multiplier applied to mean speed in the calorie formula
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;

    /// Value subtracted from the scaled mean speed in the calorie formula
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking constants
pub mod walking {
    /// Distance covered by one step, in meters
    pub const LEN_STEP_M: f64 = 0.65;

    /// Weight multiplier in the calorie formula
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the floored speed/height term
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Exponent applied to mean speed before dividing by height
    pub const SPEED_EXPONENT: i32 = 2;
}

/// Swimming constants
pub mod swimming {
    /// Distance covered by one stroke, in meters
    pub const LEN_STEP_M: f64 = 1.38;

    /// Value added to mean speed in the calorie formula
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;

    /// Weight multiplier in the calorie formula
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}
