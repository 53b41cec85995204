// ABOUTME: Workout-specific error types raised while dispatching and validating sensor packages
// ABOUTME: Covers unknown modality tags, wrong argument counts, and out-of-range sample fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::ErrorCode;

/// Errors raised before any workout metric is computed.
///
/// None of these are recoverable internally: the caller decides whether to
/// skip the package, log it, or abort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Tag is not one of `SWM`, `RUN`, `WLK`
    #[error("Unknown workout type '{tag}'. Valid options: SWM, RUN, WLK")]
    UnknownModality {
        /// Tag received from the sensor package
        tag: String,
    },

    /// Positional argument count does not match the modality constructor
    #[error("{modality} expects {expected} values, got {actual}")]
    ArityMismatch {
        /// Modality the package was dispatched to
        modality: &'static str,
        /// Number of values the modality requires
        expected: usize,
        /// Number of values actually provided
        actual: usize,
    },

    /// A sample field failed range validation
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidSample {
        /// Name of the offending field
        field: &'static str,
        /// Value that was rejected
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },
}

impl WorkoutError {
    /// Create an "unknown modality" error
    #[must_use]
    pub fn unknown_modality(tag: impl Into<String>) -> Self {
        Self::UnknownModality { tag: tag.into() }
    }

    /// Create an "arity mismatch" error
    #[must_use]
    pub const fn arity_mismatch(modality: &'static str, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            modality,
            expected,
            actual,
        }
    }

    /// Create an "invalid sample" error
    #[must_use]
    pub const fn invalid_sample(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidSample {
            field,
            value,
            reason,
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownModality { .. } => ErrorCode::UnknownModality,
            Self::ArityMismatch { .. } => ErrorCode::ArityMismatch,
            Self::InvalidSample { .. } => ErrorCode::InvalidSample,
        }
    }
}
