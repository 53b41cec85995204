// ABOUTME: Command-line driver that reports metrics for the reference sensor packages
// ABOUTME: Dispatches each package, prints one summary per workout, and skips rejected packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the informational message for each workout
//! fitness-tracker
//!
//! # Print JSON summaries with debug logging on stderr
//! fitness-tracker --format json --verbose
//! ```

use anyhow::Result;
use clap::Parser;
use fitness_tracker::formatters::{format_summary, OutputFormat};
use fitness_tracker::intelligence::{SensorPackage, TrainingCalculator};
use fitness_tracker::logging::LoggingConfig;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "fitness-tracker",
    about = "Workout metrics report",
    long_about = "Derives distance, mean speed, and calories burned for each sensor package."
)]
struct Cli {
    /// Output format (text, json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn reference_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let format = OutputFormat::from_str_param(&cli.format);
    let packages = reference_packages();
    let mut reported = 0_usize;

    for package in &packages {
        let workout = match package.read() {
            Ok(workout) => workout,
            Err(e) => {
                warn!("Skipping {} package: {e}", package.workout_type);
                continue;
            }
        };

        let output = format_summary(&workout.show_training_info(), format)?;
        println!("{}", output.data);
        reported += 1;
    }

    info!(
        packages = packages.len(),
        reported,
        format = %format,
        "Workout report complete"
    );

    Ok(())
}
