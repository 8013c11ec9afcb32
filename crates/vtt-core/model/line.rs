//! Cue text lines and their inline items

use core::fmt;

/// A run of plain text within a line
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineItem {
    /// Text content with voice markup removed
    pub text: String,
}

impl LineItem {
    /// Create an item from text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One displayed line of a cue
///
/// The voice annotation comes from a `<v Name>` tag and is scoped to the
/// single line it appeared on.
///
/// # Examples
///
/// ```rust
/// use vtt_core::model::Line;
///
/// let line = Line::from_text("What are you doing here?").with_voice("Lee");
/// assert_eq!(line.voice_name.as_deref(), Some("Lee"));
/// assert_eq!(line.to_string(), "What are you doing here?");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Speaker name from the voice tag
    pub voice_name: Option<String>,

    /// Dotted classes of the voice tag, such as `first` in `<v.first Name>`
    pub voice_classes: Vec<String>,

    /// Text items in display order
    pub items: Vec<LineItem>,
}

impl Line {
    /// Create a line holding a single text item
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            voice_name: None,
            voice_classes: Vec::new(),
            items: vec![LineItem::new(text)],
        }
    }

    /// Attach a voice name
    #[must_use]
    pub fn with_voice(mut self, name: impl Into<String>) -> Self {
        self.voice_name = Some(name.into());
        self
    }

    /// Voice name if one is set and non-empty
    #[must_use]
    pub fn voice(&self) -> Option<&str> {
        self.voice_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Plain text of the line, items joined by a single space
    #[must_use]
    pub fn text(&self) -> String {
        self.items
            .iter()
            .map(|item| item.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_items_with_space() {
        let line = Line {
            items: vec![LineItem::new("Hello"), LineItem::new("world")],
            ..Line::default()
        };
        assert_eq!(line.text(), "Hello world");
    }

    #[test]
    fn empty_voice_counts_as_none() {
        let line = Line::from_text("x").with_voice("");
        assert_eq!(line.voice(), None);
    }
}
