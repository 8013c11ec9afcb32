//! Line classification and block state transitions
//!
//! Each trimmed body line is classified once, in priority order, and the
//! classification alone decides the next [`BlockKind`]. Content lines are
//! then interpreted according to the block they fall in.

/// Comment line prefix, including the mandatory space
pub const NOTE_PREFIX: &str = "NOTE ";
/// Region declaration prefix
pub const REGION_PREFIX: &str = "Region: ";
/// Style block prefix
pub const STYLE_PREFIX: &str = "STYLE";
/// Separator between start and end timestamps
pub const TIMING_SEPARATOR: &str = " --> ";

/// Interpretation mode for content lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Between blocks; a content line is a cue identifier
    #[default]
    None,
    /// Inside a `NOTE` block; content lines are comments
    Comment,
    /// Inside a `STYLE` block; content lines are skipped
    Style,
    /// After a timing line; content lines are cue text
    Text,
}

/// Classification of one trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `NOTE <comment>`
    Comment(&'a str),
    /// Empty line
    Blank,
    /// `Region: <declaration>`
    Region(&'a str),
    /// Line starting with `STYLE`
    Style,
    /// `<start> --> <end> [settings]`
    Timing {
        /// Text before the separator
        start: &'a str,
        /// Text after the separator
        rest: &'a str,
    },
    /// Anything else
    Content(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a trimmed line
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if let Some(comment) = line.strip_prefix(NOTE_PREFIX) {
            Self::Comment(comment)
        } else if line.is_empty() {
            Self::Blank
        } else if let Some(declaration) = line.strip_prefix(REGION_PREFIX) {
            Self::Region(declaration)
        } else if line.starts_with(STYLE_PREFIX) {
            Self::Style
        } else if let Some((start, rest)) = line.split_once(TIMING_SEPARATOR) {
            Self::Timing { start, rest }
        } else {
            Self::Content(line)
        }
    }
}

impl BlockKind {
    /// Block kind after a line of the given classification
    #[must_use]
    pub const fn after(self, line: &LineKind<'_>) -> Self {
        match line {
            LineKind::Comment(_) => Self::Comment,
            LineKind::Blank => Self::None,
            LineKind::Style => Self::Style,
            LineKind::Timing { .. } => Self::Text,
            LineKind::Region(_) | LineKind::Content(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_priority() {
        assert_eq!(LineKind::classify("NOTE a --> b"), LineKind::Comment("a --> b"));
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify("Region: id=a"), LineKind::Region("id=a"));
        assert_eq!(LineKind::classify("STYLE"), LineKind::Style);
        assert_eq!(
            LineKind::classify("00:01.000 --> 00:02.000 align:left"),
            LineKind::Timing {
                start: "00:01.000",
                rest: "00:02.000 align:left"
            }
        );
        assert_eq!(LineKind::classify("NOTE"), LineKind::Content("NOTE"));
        assert_eq!(LineKind::classify("Hello"), LineKind::Content("Hello"));
    }

    #[test]
    fn transitions() {
        let comment = LineKind::Comment("x");
        let content = LineKind::Content("x");
        let region = LineKind::Region("id=a");

        assert_eq!(BlockKind::None.after(&comment), BlockKind::Comment);
        assert_eq!(BlockKind::Text.after(&LineKind::Blank), BlockKind::None);
        assert_eq!(BlockKind::None.after(&LineKind::Style), BlockKind::Style);
        assert_eq!(
            BlockKind::Comment.after(&LineKind::Timing { start: "", rest: "" }),
            BlockKind::Text
        );
        assert_eq!(BlockKind::Style.after(&content), BlockKind::Style);
        assert_eq!(BlockKind::Comment.after(&region), BlockKind::Comment);
    }
}
