// ABOUTME: Criterion benchmarks for sensor package dispatch and workout summaries
// ABOUTME: Measures per-package cost for each modality and for text/JSON rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the workout calculators.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitness_tracker::formatters::{format_summary, OutputFormat};
use fitness_tracker::intelligence::{read_package, TrainingCalculator};

const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

fn bench_dispatch_and_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_and_summary");

    for (workout_type, data) in PACKAGES {
        group.bench_with_input(
            BenchmarkId::from_parameter(workout_type),
            &(workout_type, data),
            |b, &(workout_type, data)| {
                b.iter(|| {
                    let workout = read_package(black_box(workout_type), black_box(data)).unwrap();
                    black_box(workout.show_training_info())
                });
            },
        );
    }

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let summary = read_package("RUN", &[15000.0, 1.0, 75.0])
        .unwrap()
        .show_training_info();
    let mut group = c.benchmark_group("format_summary");

    for format in [OutputFormat::Text, OutputFormat::Json] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format),
            &format,
            |b, &format| {
                b.iter(|| format_summary(black_box(&summary), format).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch_and_summary, bench_formatting);
criterion_main!(benches);
