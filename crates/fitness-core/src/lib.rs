// ABOUTME: Core types and constants for workout metric calculations
// ABOUTME: Foundation crate with error handling, protocol constants, and workout data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Core
//!
//! Foundation crate providing shared types and constants for workout metric
//! calculations. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `WorkoutError` taxonomy plus the unified `AppError` / `ErrorCode`
//! - **constants**: Unit conversions, step lengths, and calorie coefficients
//! - **models**: `WorkoutModality`, `WorkoutSample`, and `WorkoutSummary`

/// Unified error handling with `AppError`, `ErrorCode`, and `WorkoutError`
pub mod errors;

/// Fixed protocol constants organized by workout modality
pub mod constants;

/// Core data models (modality, raw sample, derived summary)
pub mod models;
