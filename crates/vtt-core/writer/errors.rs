//! Write error type for WebVTT serialization

use thiserror::Error;

/// Error raised while serializing a document
#[derive(Error, Debug)]
pub enum WriteError {
    /// The document has no cues; regions alone are not written
    #[error("no subtitles to write")]
    EmptyDocument,

    /// The output stream rejected the write
    #[error("writing failed: {0}")]
    Io(#[from] std::io::Error),
}

impl WriteError {
    /// Check whether this is the "nothing to write" case
    #[must_use]
    pub const fn is_empty_document(&self) -> bool {
        matches!(self, Self::EmptyDocument)
    }
}
