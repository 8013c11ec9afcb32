//! Sparse style attributes shared by cues and regions
//!
//! Every field is optional: `Some` means the attribute was set explicitly,
//! `None` means the format default applies. Cue settings and region settings
//! live in the same flat struct, each owner only fills its own subset.

/// Flat set of optional WebVTT rendering hints
///
/// # Examples
///
/// ```rust
/// use vtt_core::model::StyleAttributes;
///
/// let style = StyleAttributes {
///     align: Some(" left ".to_string()),
///     size: Some(String::new()),
///     ..StyleAttributes::default()
/// }
/// .normalized();
///
/// assert_eq!(style.align.as_deref(), Some("left"));
/// assert_eq!(style.size, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleAttributes {
    /// Cue text alignment (`align:`)
    pub align: Option<String>,

    /// Cue line position (`line:`)
    pub line: Option<String>,

    /// Cue text position (`position:`)
    pub position: Option<String>,

    /// Cue box size (`size:`)
    pub size: Option<String>,

    /// Cue writing direction (`vertical:`)
    pub vertical: Option<String>,

    /// Number of lines a region shows (`lines=`)
    pub lines: Option<u32>,

    /// Region anchor point (`regionanchor=`)
    pub region_anchor: Option<String>,

    /// Region scroll mode (`scroll=`)
    pub scroll: Option<String>,

    /// Region viewport anchor point (`viewportanchor=`)
    pub viewport_anchor: Option<String>,

    /// Region width (`width=`)
    pub width: Option<String>,
}

impl StyleAttributes {
    /// Resolve explicit-but-empty values to the format default
    ///
    /// Trims string values, turns empty strings into `None` and a zero line
    /// count into `None`. Applied once to each parsed cue and region.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            align: normalize(self.align),
            line: normalize(self.line),
            position: normalize(self.position),
            size: normalize(self.size),
            vertical: normalize(self.vertical),
            lines: self.lines.filter(|&lines| lines != 0),
            region_anchor: normalize(self.region_anchor),
            scroll: normalize(self.scroll),
            viewport_anchor: normalize(self.viewport_anchor),
            width: normalize(self.width),
        }
    }

    /// Check whether no attribute is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.align.is_none()
            && self.line.is_none()
            && self.position.is_none()
            && self.size.is_none()
            && self.vertical.is_none()
            && self.lines.is_none()
            && self.region_anchor.is_none()
            && self.scroll.is_none()
            && self.viewport_anchor.is_none()
            && self.width.is_none()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
