// ABOUTME: Main library entry point for the fitness tracker
// ABOUTME: Derives distance, mean speed, and calories from raw workout sensor packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! Computes derived workout metrics from raw sensor readings for running,
//! sports walking, and swimming.
//!
//! ## Architecture
//!
//! - **Intelligence**: Calculator hierarchy and sensor package dispatcher
//! - **Formatters**: Text and JSON rendering of workout summaries
//! - **Logging**: Structured logging setup
//! - **Errors / Models / Constants**: Re-exported from `fitness-core`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitness_tracker::formatters::{format_summary, OutputFormat};
//! use fitness_tracker::intelligence::{read_package, TrainingCalculator};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let output = format_summary(&workout.show_training_info(), OutputFormat::Text)?;
//! println!("{}", output.data);
//! # Ok::<(), fitness_tracker::errors::AppError>(())
//! ```

/// Workout calculators and sensor package dispatch
pub mod intelligence;

/// Output format abstraction (text, JSON) for workout summaries
pub mod formatters;

/// Structured logging configuration
pub mod logging;

pub use fitness_core::{constants, errors, models};
