/*!
 * Error types for the subtitler application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Which side of the ` --> ` separator a timestamp came from.
///
/// Carried inside parse errors so messages can tell the user whether the
/// starting or the ending timestamp of a cue is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampKind {
    /// The timestamp before the arrow
    Starting,
    /// The timestamp after the arrow
    Ending,
}

impl std::fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Starting => write!(f, "starting"),
            Self::Ending => write!(f, "ending"),
        }
    }
}

/// Errors that can occur while parsing SRT text.
///
/// Every variant carries the 1-based line number within the original input
/// so the caller can point the user at the offending line. The first error
/// aborts the whole parse; there is no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The index line of a cue is missing or not a positive integer
    #[error("Invalid index on line {line}: {text}")]
    InvalidIndex {
        /// Line the cue starts on
        line: usize,
        /// The offending block text
        text: String,
    },

    /// The timestamp line does not split into exactly two ` --> ` fields
    #[error("Invalid timestamps on line {line}")]
    InvalidTimestamps {
        /// Line the timestamps are on
        line: usize,
    },

    /// A timestamp field lacks the HH:MM:SS,mmm shape
    #[error("Invalid format for {kind} timestamp on line {line}")]
    InvalidTimestampFormat { line: usize, kind: TimestampKind },

    /// The hours field is not an integer
    #[error("Invalid hours in {kind} timestamp on line {line}")]
    InvalidTimestampHours { line: usize, kind: TimestampKind },

    /// The minutes field is not an integer
    #[error("Invalid minutes in {kind} timestamp on line {line}")]
    InvalidTimestampMinutes { line: usize, kind: TimestampKind },

    /// The seconds field is not an integer
    #[error("Invalid seconds in {kind} timestamp on line {line}")]
    InvalidTimestampSeconds { line: usize, kind: TimestampKind },

    /// The milliseconds field is not an integer
    #[error("Invalid milliseconds in {kind} timestamp on line {line}")]
    InvalidTimestampMilliseconds { line: usize, kind: TimestampKind },
}

impl ParseError {
    /// 1-based line number within the original input where the error occurred
    pub fn line_number(&self) -> usize {
        match self {
            Self::InvalidIndex { line, .. }
            | Self::InvalidTimestamps { line }
            | Self::InvalidTimestampFormat { line, .. }
            | Self::InvalidTimestampHours { line, .. }
            | Self::InvalidTimestampMinutes { line, .. }
            | Self::InvalidTimestampSeconds { line, .. }
            | Self::InvalidTimestampMilliseconds { line, .. } => *line,
        }
    }

    /// Detailed reason suitable for a diagnostic report
    pub fn failure_reason(&self) -> String {
        match self {
            Self::InvalidIndex { line, text } => format!(
                "Failed to parse index on line {}. Index must be a positive integer: {}",
                line, text
            ),
            Self::InvalidTimestamps { line } => format!(
                "Failed to parse timestamps on line {}. Timestamps must be separated by ' --> '",
                line
            ),
            Self::InvalidTimestampFormat { line, kind } => format!(
                "Failed to parse {} timestamp on line {}. Timestamp must be formatted as HH:MM:SS,mmm",
                kind, line
            ),
            Self::InvalidTimestampHours { line, kind } => format!(
                "Failed to parse hours in {} timestamp on line {}. Hours must be between 0 - 99",
                kind, line
            ),
            Self::InvalidTimestampMinutes { line, kind } => format!(
                "Failed to parse minutes in {} timestamp on line {}. Minutes must be between 0 - 59",
                kind, line
            ),
            Self::InvalidTimestampSeconds { line, kind } => format!(
                "Failed to parse seconds in {} timestamp on line {}. Seconds must be between 0 - 59",
                kind, line
            ),
            Self::InvalidTimestampMilliseconds { line, kind } => format!(
                "Failed to parse milliseconds in {} timestamp on line {}. Milliseconds must be between 0 - 999",
                kind, line
            ),
        }
    }

    /// Short hint on how the user can fix the input
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "Update index to any positive integer.",
            Self::InvalidTimestamps { .. } | Self::InvalidTimestampFormat { .. } => {
                "Ensure timestamps are properly formatted"
            }
            Self::InvalidTimestampHours { .. } => "Update hours to a valid value",
            Self::InvalidTimestampMinutes { .. } => "Update minutes to a valid value",
            Self::InvalidTimestampSeconds { .. } => "Update seconds to a valid value",
            Self::InvalidTimestampMilliseconds { .. } => "Update milliseconds to a valid value",
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from parsing subtitle text
    #[error("Subtitle parse error: {0}")]
    Parse(#[from] ParseError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
