//! Named display regions declared by `Region:` header lines

use super::StyleAttributes;

/// On-screen display area referenced by cues
///
/// Regions are immutable once parsed and shared between cues through
/// `Arc<Region>` handles held by the [`Document`](super::Document).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Unique region identifier (`id=`)
    pub id: String,

    /// Region settings; only the region subset of fields is used
    pub style: StyleAttributes,
}

impl Region {
    /// Create a region without settings
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style: StyleAttributes::default(),
        }
    }

    /// Replace the region settings
    #[must_use]
    pub fn with_style(mut self, style: StyleAttributes) -> Self {
        self.style = style;
        self
    }
}
