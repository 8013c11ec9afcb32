//! Parse error type for WebVTT reading
//!
//! Every structural failure is fatal to the whole parse and carries the
//! 1-based source line together with the offending fragment. Unknown keys,
//! unmatched voice closing tags and `STYLE` block content are accepted
//! silently and never reach this type.

use thiserror::Error;

/// Unrecoverable error raised while reading a WebVTT stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Region setting token without a `key=value` shape
    #[error("line {line}: invalid region attribute '{token}': expected key=value")]
    MalformedRegionAttribute { line: usize, token: String },

    /// Integer region setting that is not a number
    #[error("line {line}: invalid integer '{value}' for region attribute '{key}'")]
    InvalidIntegerAttribute {
        line: usize,
        key: String,
        value: String,
    },

    /// Cue setting token without a `key:value` shape
    #[error("line {line}: invalid cue setting '{token}': expected key:value")]
    MalformedStyleAttribute { line: usize, token: String },

    /// Cue setting naming a region that was never declared
    #[error("line {line}: unknown region '{region}'")]
    UnknownRegionReference { line: usize, region: String },

    /// Cue timing that does not follow the timestamp grammar
    #[error("line {line}: invalid timestamp '{timestamp}': {reason}")]
    InvalidTimestamp {
        timestamp: String,
        line: usize,
        reason: String,
    },

    /// Reading the underlying stream failed
    #[error("I/O error while reading: {message}")]
    Io { message: String },
}

impl ParseError {
    /// Source line the error was raised on, if it came from the input text
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRegionAttribute { line, .. }
            | Self::InvalidIntegerAttribute { line, .. }
            | Self::MalformedStyleAttribute { line, .. }
            | Self::UnknownRegionReference { line, .. }
            | Self::InvalidTimestamp { line, .. } => Some(*line),
            Self::Io { .. } => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
