//! WebVTT reader
//!
//! Converts a byte stream into a [`Document`] in a single pass. Parsing is
//! all-or-nothing: the first structural error aborts the call.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::parse;
//!
//! let text = "WEBVTT\n\nRegion: id=bill lines=3\n\nNOTE first cue\n\n1\n00:00:01.000 --> 00:00:02.500 region:bill align:left\n<v Bill>Hello</v>\n";
//! let doc = parse(text.as_bytes())?;
//!
//! let cue = &doc.cues()[0];
//! assert_eq!(cue.comments, vec!["first cue"]);
//! assert_eq!(cue.lines[0].voice_name.as_deref(), Some("Bill"));
//! assert_eq!(cue.region.as_ref().map(|r| r.id.as_str()), Some("bill"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{BufReader, Read};

use crate::model::Document;

pub mod block;
pub mod errors;
mod reader;
pub mod settings;
mod voice;

pub use errors::ParseError;
pub use reader::Reader;
pub use voice::parse_voice_tag;

/// Parse a WebVTT stream into a document
///
/// A stream without a `WEBVTT` header yields an empty document.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the 1-based line number for malformed
/// region or cue settings, non-numeric `lines`, unknown region references,
/// unparsable timestamps, and stream read failures.
pub fn parse<R: Read>(input: R) -> Result<Document, ParseError> {
    Reader::new(BufReader::new(input)).read()
}

impl Document {
    /// Parse WebVTT text held in memory
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse_str(text: &str) -> Result<Self, ParseError> {
        Reader::new(text.as_bytes()).read()
    }
}
