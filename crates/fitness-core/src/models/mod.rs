// ABOUTME: Core workout data models shared across the workspace
// ABOUTME: Re-exports modality, raw sample, and derived summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models for workout metric calculations.
//!
//! A [`WorkoutSample`] is built from one sensor package and consumed once to
//! produce one [`WorkoutSummary`]. Neither type is mutated after construction.

/// Workout modality (running, sports walking, swimming)
pub mod modality;

/// Validated raw sample attributes shared by every modality
pub mod sample;

/// Derived metrics reported for one sample
pub mod summary;

pub use modality::WorkoutModality;
pub use sample::{count_field, positive_field, WorkoutSample};
pub use summary::WorkoutSummary;
