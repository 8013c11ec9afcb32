//! Core error type for vtt-core operations
//!
//! Provides the main `CoreError` enum that wraps the reader and writer error
//! types so callers juggling both directions can propagate a single type.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Keep line numbers and offending fragments on parse errors
//! - Keep the "nothing to write" case distinguishable from I/O failures
//!
//! # Examples
//!
//! ```rust
//! use vtt_core::utils::errors::{CoreError, ErrorCategory};
//!
//! let time_err = CoreError::invalid_time("1:2:3:4", "too many components");
//! assert_eq!(time_err.category(), ErrorCategory::Format);
//! ```

use core::fmt;

use thiserror::Error;

use crate::parser::ParseError;
use crate::writer::WriteError;

/// Main error type for vtt-core operations
///
/// Module-specific errors convert into it with `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Errors raised while reading a WebVTT stream
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Serializing a document without cues
    #[error("no subtitles to write")]
    EmptyDocument,

    /// Stream failures while writing, rendered to text
    #[error("I/O error: {0}")]
    Io(String),

    /// Time format parsing errors
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// Document model validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Create time error from invalid format
    pub fn invalid_time<T: fmt::Display>(time: T, reason: &str) -> Self {
        Self::InvalidTime(format!("'{time}': {reason}"))
    }

    /// Create validation error from message
    pub fn validation<T: fmt::Display>(message: T) -> Self {
        Self::Validation(format!("{message}"))
    }

    /// Get the category used for grouping this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(ParseError::Io { .. }) | Self::Io(_) => ErrorCategory::Io,
            Self::Parse(_) => ErrorCategory::Parsing,
            Self::InvalidTime(_) => ErrorCategory::Format,
            Self::EmptyDocument | Self::Validation(_) => ErrorCategory::Validation,
        }
    }

    /// Check if the failure came from the input itself rather than the environment
    ///
    /// Input errors can be fixed by correcting the WebVTT text; I/O errors cannot.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self.category(), ErrorCategory::Io)
    }
}

impl From<WriteError> for CoreError {
    fn from(error: WriteError) -> Self {
        match error {
            WriteError::EmptyDocument => Self::EmptyDocument,
            WriteError::Io(err) => Self::Io(err.to_string()),
        }
    }
}

/// Error category for filtering and user interface organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Structure errors in the WebVTT block grammar
    Parsing,

    /// Value format errors such as malformed timestamps
    Format,

    /// Reading from or writing to the underlying stream failed
    Io,

    /// Document model constraints were violated
    Validation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsing => write!(f, "parsing"),
            Self::Format => write!(f, "format"),
            Self::Io => write!(f, "io"),
            Self::Validation => write!(f, "validation"),
        }
    }
}
