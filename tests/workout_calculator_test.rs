// ABOUTME: Integration tests for workout calculators through the public API
// ABOUTME: Verifies distance, mean speed, and calorie formulas for every modality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use fitness_tracker::intelligence::{Running, SportsWalking, Swimming, TrainingCalculator};
use fitness_tracker::models::WorkoutSample;

const TOLERANCE: f64 = 1e-9;

fn sample(action_count: u32, duration_hours: f64, weight_kg: f64) -> WorkoutSample {
    WorkoutSample::new(action_count, duration_hours, weight_kg).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

// === Running ===

#[test]
fn test_running_distance_is_steps_times_step_length() {
    let samples = [(1_u32, 0.1, 50.0), (15000, 1.0, 75.0), (42195, 3.5, 90.0)];

    for (action, duration, weight) in samples {
        let running = Running::new(sample(action, duration, weight));
        assert_eq!(running.distance_km(), f64::from(action) * 0.65 / 1000.0);
    }
}

#[test]
fn test_running_mean_speed_divides_distance_by_duration() {
    let running = Running::new(sample(10_000, 0.5, 70.0));

    assert_close(running.distance_km(), 6.5);
    assert_close(running.mean_speed_kmh(), 13.0);
}

#[test]
fn test_running_calories() {
    let running = Running::new(sample(15000, 1.0, 75.0));

    // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
    assert_close(running.spent_calories(), 699.75);
}

#[test]
fn test_running_calories_scale_with_duration() {
    let running = Running::new(sample(10_000, 0.5, 70.0));

    // (18 * 13 - 20) * 70 / 1000 * 0.5 * 60
    assert_close(running.spent_calories(), 449.4);
}

// === Sports walking ===

#[test]
fn test_walking_speed_term_is_floor_divided() {
    // speed = 13 km/h, speed^2 / height = 169 / 7 = 24.14..., floored to 24
    let walking = SportsWalking::new(sample(20_000, 1.0, 75.0), 7.0).unwrap();

    let floored = (0.035 * 75.0 + 24.0 * 0.029 * 75.0) * 60.0;
    let true_division = (0.035 * 75.0 + (169.0 / 7.0) * 0.029 * 75.0) * 60.0;

    assert_close(walking.spent_calories(), 3289.5);
    assert_close(walking.spent_calories(), floored);
    assert!((walking.spent_calories() - true_division).abs() > 1.0);
}

#[test]
fn test_walking_speed_term_vanishes_below_height() {
    // speed^2 = 34.2225 < 180, so only the weight term remains
    let walking = SportsWalking::new(sample(9000, 1.0, 75.0), 180.0).unwrap();

    assert_close(walking.distance_km(), 5.85);
    assert_close(walking.mean_speed_kmh(), 5.85);
    assert_close(walking.spent_calories(), 157.5);
}

#[test]
fn test_walking_uses_running_step_length() {
    let walking = SportsWalking::new(sample(9000, 1.5, 60.0), 100.0).unwrap();

    assert_close(walking.distance_km(), 5.85);
    assert_close(walking.mean_speed_kmh(), 3.9);
    assert_close(walking.spent_calories(), 189.0);
    assert_eq!(walking.height_cm(), 100.0);
}

// === Swimming ===

#[test]
fn test_swimming_distance_uses_stroke_length() {
    let swimming = Swimming::new(sample(720, 1.0, 80.0), 25.0, 40).unwrap();

    assert_eq!(swimming.distance_km(), 720.0 * 1.38 / 1000.0);
}

#[test]
fn test_swimming_speed_ignores_stroke_distance() {
    let swimming = Swimming::new(sample(720, 1.0, 80.0), 25.0, 40).unwrap();

    let stroke_based_speed = swimming.distance_km() / 1.0;
    assert_close(swimming.mean_speed_kmh(), 1.0);
    assert!((swimming.mean_speed_kmh() - stroke_based_speed).abs() > 1e-3);
}

#[test]
fn test_swimming_speed_independent_of_action_count() {
    let few_strokes = Swimming::new(sample(10, 2.0, 80.0), 50.0, 60).unwrap();
    let many_strokes = Swimming::new(sample(5000, 2.0, 80.0), 50.0, 60).unwrap();

    assert_eq!(few_strokes.mean_speed_kmh(), many_strokes.mean_speed_kmh());
    assert_close(few_strokes.mean_speed_kmh(), 1.5);
}

#[test]
fn test_swimming_calories() {
    let swimming = Swimming::new(sample(720, 1.0, 80.0), 25.0, 40).unwrap();

    // (1.0 + 1.1) * 2 * 80
    assert_close(swimming.spent_calories(), 336.0);
    assert_eq!(swimming.pool_length_m(), 25.0);
    assert_eq!(swimming.pool_count(), 40);
}

// === Summaries ===

#[test]
fn test_summary_collects_every_metric() {
    let running = Running::new(sample(15000, 1.0, 75.0));
    let summary = running.show_training_info();

    assert_eq!(summary.modality_name, "Running");
    assert_eq!(summary.duration_hours, 1.0);
    assert_eq!(summary.distance_km, running.distance_km());
    assert_eq!(summary.mean_speed_kmh, running.mean_speed_kmh());
    assert_eq!(summary.calories_burned, running.spent_calories());
}

#[test]
fn test_summary_is_idempotent() {
    let walking = SportsWalking::new(sample(9000, 1.0, 75.0), 180.0).unwrap();

    let first = walking.show_training_info();
    let second = walking.show_training_info();

    assert_eq!(first, second);
    assert_eq!(first.calories_burned.to_bits(), second.calories_burned.to_bits());
    assert_eq!(first.mean_speed_kmh.to_bits(), second.mean_speed_kmh.to_bits());
}

#[test]
fn test_zero_actions_produce_zero_distance() {
    let running = Running::new(sample(0, 1.0, 75.0));
    let summary = running.show_training_info();

    assert_eq!(summary.distance_km, 0.0);
    assert_eq!(summary.mean_speed_kmh, 0.0);
    // (18 * 0 - 20) * 75 / 1000 * 60
    assert_close(summary.calories_burned, -90.0);
}
