// ABOUTME: Output format abstraction for presenting workout summaries
// ABOUTME: Supports the fixed informational text line (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Summaries are values; writing them anywhere is the caller's job. This
//! module only turns a [`WorkoutSummary`] into a string.
//!
//! ## Supported Formats
//!
//! - **Text**: The informational message, every float to three decimals
//! - **JSON**: The summary fields as a JSON object
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fitness_tracker::formatters::{format_summary, OutputFormat};
//!
//! let output = format_summary(&summary, OutputFormat::Json)?;
//! println!("{}", output.data);
//! ```

use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::WorkoutSummary;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Informational message line (default)
    #[default]
    Text,
    /// JSON object with the summary fields
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered summary and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered summary
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Render a workout summary in the requested format
///
/// # Errors
///
/// Returns `AppError` with `ErrorCode::SerializationError` if JSON
/// serialization fails
pub fn format_summary(
    summary: &WorkoutSummary,
    format: OutputFormat,
) -> AppResult<FormattedOutput> {
    let data = match format {
        OutputFormat::Text => summary.message(),
        OutputFormat::Json => serde_json::to_string(summary).map_err(|e| {
            AppError::serialization(format!("Failed to serialize workout summary: {e}"))
                .with_source(e)
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}
