// ABOUTME: Unified error types for workout metric calculations
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Errors raised while turning sensor packages into workout summaries all
//! happen at dispatch or construction time, before any metric is computed.
//! Domain failures are expressed as [`WorkoutError`]; callers that need a
//! single error type (the CLI driver, formatters) work with [`AppError`].

/// Workout-specific error taxonomy
pub mod workout;

pub use workout::WorkoutError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Dispatch (1000-1999)
    /// Workout type tag is not one of the recognized modalities
    UnknownModality = 1000,
    /// Positional argument count does not match the modality
    ArityMismatch = 1001,

    // Validation (3000-3999)
    /// A sample field is out of range (non-positive, non-integral, not finite)
    InvalidSample = 3000,

    // Internal (9000-9999)
    /// Summary serialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownModality => "The workout type is not recognized",
            Self::ArityMismatch => "The sensor package has the wrong number of values",
            Self::InvalidSample => "The sensor package contains an invalid value",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Stable machine-readable name of the code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownModality => "UNKNOWN_MODALITY",
            Self::ArityMismatch => "ARITY_MISMATCH",
            Self::InvalidSample => "INVALID_SAMPLE",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<WorkoutError> for AppError {
    fn from(error: WorkoutError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
