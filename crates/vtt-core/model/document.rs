//! Document container owning cues and the region table

use std::sync::Arc;

use super::{Cue, Region};
use crate::utils::hashers::{create_hash_map, IdMap};

/// In-memory WebVTT document
///
/// Cues keep document order. Regions are keyed by identifier; their
/// insertion order carries no meaning.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use vtt_core::model::{Cue, Document, Line, Region};
///
/// let mut doc = Document::new();
/// let fred = doc.add_region(Region::new("fred"));
/// doc.push_cue(
///     Cue::new(Duration::ZERO, Duration::from_secs(2))
///         .with_region(fred)
///         .with_line(Line::from_text("Hi")),
/// );
///
/// assert_eq!(doc.cues().len(), 1);
/// assert!(doc.region("fred").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Cues in document order
    cues: Vec<Cue>,

    /// Regions by identifier
    regions: IdMap<Arc<Region>>,
}

impl Document {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            cues: Vec::new(),
            regions: create_hash_map(),
        }
    }

    /// Check whether the document has no cues
    ///
    /// Regions alone do not make a document writable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Get all cues in document order
    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Get mutable access to the cues
    pub fn cues_mut(&mut self) -> &mut Vec<Cue> {
        &mut self.cues
    }

    /// Append a cue
    pub fn push_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Get the region table
    #[must_use]
    pub const fn regions(&self) -> &IdMap<Arc<Region>> {
        &self.regions
    }

    /// Look up a region by identifier
    #[must_use]
    pub fn region(&self, id: &str) -> Option<&Arc<Region>> {
        self.regions.get(id)
    }

    /// Region identifiers in ascending lexical order
    #[must_use]
    pub fn region_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Store a region and return the shared handle cues should reference
    ///
    /// A region with the same identifier is replaced.
    pub fn add_region(&mut self, region: Region) -> Arc<Region> {
        let region = Arc::new(region);
        self.insert_region(Arc::clone(&region));
        region
    }

    /// Store a shared region, returning the one it replaced
    pub fn insert_region(&mut self, region: Arc<Region>) -> Option<Arc<Region>> {
        self.regions.insert(region.id.clone(), region)
    }
}
