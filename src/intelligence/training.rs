// ABOUTME: Workout calculators deriving distance, mean speed, and calories from raw samples
// ABOUTME: Sealed calculator contract with Running, SportsWalking, and Swimming implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Calculators
//!
//! [`TrainingCalculator`] carries the formulas shared by every modality:
//! step-based distance and distance-over-duration speed. Calorie expenditure
//! has no shared formula, so every implementor must provide one; a calculator
//! without a calorie formula does not compile.
//!
//! The modality set is closed. [`Workout`] is the enum the dispatcher hands
//! back, and it delegates to whichever calculator it wraps.
//!
//! # Example
//!
//! ```rust,no_run
//! use fitness_tracker::intelligence::training::{Running, TrainingCalculator};
//! use fitness_tracker::models::WorkoutSample;
//!
//! let sample = WorkoutSample::new(15000, 1.0, 75.0)?;
//! let summary = Running::new(sample).show_training_info();
//! assert_eq!(summary.modality_name, "Running");
//! # Ok::<(), fitness_tracker::errors::WorkoutError>(())
//! ```

use fitness_core::constants::units::{MIN_IN_H, M_IN_KM};
use fitness_core::constants::{running, swimming, walking};
use fitness_core::errors::WorkoutError;
use fitness_core::models::{positive_field, WorkoutModality, WorkoutSample, WorkoutSummary};
use tracing::debug;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Running {}
    impl Sealed for super::SportsWalking {}
    impl Sealed for super::Swimming {}
    impl Sealed for super::Workout {}
}

/// Metric formulas for one workout sample
///
/// Implemented only by the calculators in this module.
pub trait TrainingCalculator: sealed::Sealed {
    /// Modality this calculator handles
    fn modality(&self) -> WorkoutModality;

    /// Raw sample the metrics are derived from
    fn sample(&self) -> &WorkoutSample;

    /// Distance covered, in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.sample().action_count()) * self.modality().step_length_m() / M_IN_KM
    }

    /// Mean speed, in kilometers per hour
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.sample().duration_hours()
    }

    /// Energy spent, in kilocalories
    fn spent_calories(&self) -> f64;

    /// Derive the summary reported for this workout
    ///
    /// Calling this repeatedly yields identical summaries.
    fn show_training_info(&self) -> WorkoutSummary {
        let summary = WorkoutSummary {
            modality_name: self.modality().name().to_owned(),
            duration_hours: self.sample().duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_burned: self.spent_calories(),
        };

        debug!(
            workout.modality = %summary.modality_name,
            workout.distance_km = summary.distance_km,
            workout.mean_speed_kmh = summary.mean_speed_kmh,
            workout.calories = summary.calories_burned,
            "Workout summary computed"
        );

        summary
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    sample: WorkoutSample,
}

impl Running {
    /// Create a running calculator; no fields beyond the base sample
    #[must_use]
    pub const fn new(sample: WorkoutSample) -> Self {
        Self { sample }
    }
}

impl TrainingCalculator for Running {
    fn modality(&self) -> WorkoutModality {
        WorkoutModality::Running
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    // (18 * speed - 20) * weight / 1000 * duration * 60
    #[allow(clippy::suboptimal_flops)] // unfused arithmetic keeps reference values exact
    fn spent_calories(&self) -> f64 {
        (running::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            - running::CALORIES_MEAN_SPEED_SHIFT)
            * self.sample.weight_kg()
            / M_IN_KM
            * self.sample.duration_hours()
            * MIN_IN_H
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    sample: WorkoutSample,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a walking calculator
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::InvalidSample` if `height_cm` is not a finite,
    /// strictly positive number
    pub fn new(sample: WorkoutSample, height_cm: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            sample,
            height_cm: positive_field("height", height_cm)?,
        })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl TrainingCalculator for SportsWalking {
    fn modality(&self) -> WorkoutModality {
        WorkoutModality::SportsWalking
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    // (0.035 * weight + (speed^2 // height) * 0.029 * weight) * duration * 60
    //
    // speed^2 is floor-divided by height; reference values depend on it.
    #[allow(clippy::suboptimal_flops)] // unfused arithmetic keeps reference values exact
    fn spent_calories(&self) -> f64 {
        let weight = self.sample.weight_kg();
        let speed_height_ratio =
            floor_div(self.mean_speed_kmh().powi(walking::SPEED_EXPONENT), self.height_cm);

        (walking::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height_ratio * walking::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.sample.duration_hours()
            * MIN_IN_H
    }
}

/// Floor division computed from the exact remainder
///
/// `(a / b).floor()` and `div_euclid` round the quotient before flooring, so
/// a quotient just below a whole number can come out one too high.
fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    sample: WorkoutSample,
    pool_length_m: f64,
    pool_count: u32,
}

impl Swimming {
    /// Create a swimming calculator
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::InvalidSample` if `pool_length_m` is not a
    /// finite, strictly positive number or `pool_count` is zero
    pub fn new(
        sample: WorkoutSample,
        pool_length_m: f64,
        pool_count: u32,
    ) -> Result<Self, WorkoutError> {
        let pool_length_m = positive_field("pool length", pool_length_m)?;
        if pool_count == 0 {
            return Err(WorkoutError::invalid_sample(
                "pool count",
                0.0,
                "must be greater than zero",
            ));
        }

        Ok(Self {
            sample,
            pool_length_m,
            pool_count,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn pool_count(&self) -> u32 {
        self.pool_count
    }
}

impl TrainingCalculator for Swimming {
    fn modality(&self) -> WorkoutModality {
        WorkoutModality::Swimming
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    // Pool length * pool count; stroke-based distance is not involved
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_count) / M_IN_KM / self.sample.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + swimming::CALORIES_MEAN_SPEED_SHIFT)
            * swimming::CALORIES_WEIGHT_MULTIPLIER
            * self.sample.weight_kg()
    }
}

/// A calculator for any supported modality
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Pool swimming workout
    Swimming(Swimming),
}

impl Workout {
    fn calculator(&self) -> &dyn TrainingCalculator {
        match self {
            Self::Running(calculator) => calculator,
            Self::SportsWalking(calculator) => calculator,
            Self::Swimming(calculator) => calculator,
        }
    }
}

impl TrainingCalculator for Workout {
    fn modality(&self) -> WorkoutModality {
        self.calculator().modality()
    }

    fn sample(&self) -> &WorkoutSample {
        self.calculator().sample()
    }

    fn distance_km(&self) -> f64 {
        self.calculator().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.calculator().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.calculator().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(calculator: Running) -> Self {
        Self::Running(calculator)
    }
}

impl From<SportsWalking> for Workout {
    fn from(calculator: SportsWalking) -> Self {
        Self::SportsWalking(calculator)
    }
}

impl From<Swimming> for Workout {
    fn from(calculator: Swimming) -> Self {
        Self::Swimming(calculator)
    }
}
