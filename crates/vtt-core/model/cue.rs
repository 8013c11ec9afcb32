//! Timed cue entries

use core::time::Duration;
use std::sync::Arc;

use super::{Line, Region, StyleAttributes};

/// One timed subtitle entry
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use vtt_core::model::{Cue, Line};
///
/// let cue = Cue::new(Duration::from_secs(1), Duration::from_secs(3))
///     .with_line(Line::from_text("Hello"));
///
/// assert_eq!(cue.duration(), Duration::from_secs(2));
/// assert_eq!(cue.text(), "Hello");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cue {
    /// Numeric identifier read from the source; the writer renumbers from 1
    pub index: usize,

    /// Start time since zero
    pub start: Duration,

    /// End time since zero; not checked against `start`
    pub end: Duration,

    /// Comment lines from the `NOTE` blocks preceding the cue
    pub comments: Vec<String>,

    /// Cue settings; only the cue subset of fields is used
    pub style: StyleAttributes,

    /// Region the cue is displayed in
    pub region: Option<Arc<Region>>,

    /// Text lines in display order
    pub lines: Vec<Line>,
}

impl Cue {
    /// Create an empty cue spanning `start..end`
    #[must_use]
    pub fn new(start: Duration, end: Duration) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Append a text line
    #[must_use]
    pub fn with_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Attach a comment line
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Replace the cue settings
    #[must_use]
    pub fn with_style(mut self, style: StyleAttributes) -> Self {
        self.style = style;
        self
    }

    /// Display the cue inside a region
    #[must_use]
    pub fn with_region(mut self, region: Arc<Region>) -> Self {
        self.region = Some(region);
        self
    }

    /// Time the cue stays on screen, zero if `end` precedes `start`
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }

    /// Plain text of all lines joined by newlines
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
