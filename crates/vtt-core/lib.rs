//! # vtt-core
//!
//! Reader and writer for WebVTT subtitles. Parses a byte stream into an
//! in-memory [`Document`] of timed cues, shared regions, comments and voice
//! annotated lines, and renders any document back into canonical WebVTT.
//!
//! ## Features
//!
//! - **Single pass reading**: Line-oriented block state machine over `BufRead`
//! - **Typed errors**: Every structural failure carries its 1-based line
//! - **Shared regions**: Cues hold `Arc` handles into the region table
//! - **Canonical output**: Sorted regions, renumbered cues, fixed setting order
//! - **Optional serde**: Document model serialization behind `serde`
//!
//! ## Quick Start
//!
//! ```rust
//! use vtt_core::{parse, Document};
//!
//! let text = "WEBVTT\n\n1\n00:00:01.000 --> 00:00:04.000 align:left\n<v Lee>What are you doing here?</v>\n";
//!
//! let doc: Document = parse(text.as_bytes())?;
//! assert_eq!(doc.cues()[0].lines[0].voice_name.as_deref(), Some("Lee"));
//!
//! let mut out = Vec::new();
//! vtt_core::serialize(&doc, &mut out)?;
//! assert_eq!(String::from_utf8(out)?, text);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod model;
pub mod parser;
pub mod utils;
pub mod writer;

pub use model::{Cue, Document, Line, LineItem, Region, StyleAttributes};
pub use parser::{parse, parse_voice_tag, ParseError, Reader};
pub use utils::CoreError;
pub use writer::{serialize, WriteError, Writer, WriterOptions};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for operations mixing reading and writing
pub type Result<T> = core::result::Result<T, CoreError>;

/// Parse WebVTT text and render it again with the given options
///
/// # Errors
///
/// Returns [`CoreError::Parse`] for malformed input and
/// [`CoreError::EmptyDocument`] if the input holds no cues.
///
/// # Examples
///
/// ```rust
/// use vtt_core::{normalize, WriterOptions};
///
/// let messy = "WEBVTT\r\n\r\n7\r\n00:01.5 --> 00:02.25\r\nHi\r\n";
/// let clean = normalize(messy, &WriterOptions::default())?;
/// assert_eq!(clean, "WEBVTT\n\n1\n00:00:01.500 --> 00:00:02.250\nHi\n");
/// # Ok::<(), vtt_core::CoreError>(())
/// ```
pub fn normalize(text: &str, options: &WriterOptions) -> Result<String> {
    let document = Document::parse_str(text)?;
    let bytes = Writer::new(options.clone()).to_bytes(&document)?;
    String::from_utf8(bytes).map_err(|err| CoreError::Io(err.to_string()))
}
