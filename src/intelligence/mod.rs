// ABOUTME: Workout intelligence module deriving metrics from sensor packages
// ABOUTME: Provides the calculator hierarchy and the tag-based package dispatcher

//! Workout Intelligence
//!
//! Control flow is linear: a sensor package is dispatched to a calculator,
//! and the calculator produces one summary.
//!
//! ```rust,no_run
//! use fitness_tracker::intelligence::{read_package, TrainingCalculator};
//!
//! let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//! println!("{}", workout.show_training_info());
//! # Ok::<(), fitness_tracker::errors::WorkoutError>(())
//! ```

/// Tag-based sensor package dispatch
pub mod dispatcher;

/// Workout calculators (running, sports walking, swimming)
pub mod training;

pub use dispatcher::{read_package, SensorPackage};
pub use training::{Running, SportsWalking, Swimming, TrainingCalculator, Workout};
