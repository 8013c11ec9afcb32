//! WebVTT writer
//!
//! Renders a [`Document`] into canonical WebVTT independent of how the
//! document was read: regions sorted by identifier, cues renumbered from 1,
//! settings in a fixed order. The full output is built in memory and handed
//! to the stream in one write.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use vtt_core::model::{Cue, Document, Line};
//!
//! let mut doc = Document::new();
//! doc.push_cue(
//!     Cue::new(Duration::from_secs(1), Duration::from_millis(2_500))
//!         .with_line(Line::from_text("Hello")),
//! );
//!
//! assert_eq!(
//!     doc.to_vtt_string()?,
//!     "WEBVTT\n\n1\n00:00:01.000 --> 00:00:02.500\nHello\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use core::fmt::{self, Write as _};
use std::io::{self, Write};

use log::debug;

use crate::model::{Cue, Document, Line, Region};
use crate::utils::format_timestamp;

mod errors;

pub use errors::WriteError;

/// Configuration options for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Re-emit `<v Name>` markup for lines that carry a voice name
    pub voice_tags: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self { voice_tags: true }
    }
}

impl WriterOptions {
    /// Create the default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable voice tag output
    #[must_use]
    pub const fn with_voice_tags(mut self, voice_tags: bool) -> Self {
        self.voice_tags = voice_tags;
        self
    }
}

/// Formatter turning documents into WebVTT bytes
#[derive(Debug, Clone, Default)]
pub struct Writer {
    /// Output configuration
    options: WriterOptions,
}

impl Writer {
    /// Create a writer with the given options
    #[must_use]
    pub const fn new(options: WriterOptions) -> Self {
        Self { options }
    }

    /// Get the writer options
    #[must_use]
    pub const fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Serialize a document into a stream
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::EmptyDocument`] if the document has no cues and
    /// [`WriteError::Io`] if the stream fails.
    pub fn write_to<W: Write>(&self, document: &Document, mut out: W) -> Result<(), WriteError> {
        let bytes = self.to_bytes(document)?;
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }

    /// Serialize a document into memory
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::EmptyDocument`] if the document has no cues.
    pub fn to_bytes(&self, document: &Document) -> Result<Vec<u8>, WriteError> {
        if document.is_empty() {
            return Err(WriteError::EmptyDocument);
        }

        let mut out = String::new();
        self.render(document, &mut out)
            .map_err(|_| io::Error::other("formatting output failed"))?;

        // a single trailing newline closes the last cue
        if out.ends_with("\n\n") {
            out.pop();
        }

        debug!(
            "wrote {} cues and {} regions in {} bytes",
            document.cues().len(),
            document.regions().len(),
            out.len()
        );
        Ok(out.into_bytes())
    }

    /// Render the whole document
    fn render(&self, document: &Document, out: &mut String) -> fmt::Result {
        out.push_str("WEBVTT\n\n");

        let ids = document.region_ids();
        for region in ids.iter().filter_map(|id| document.region(id)) {
            render_region(region, out)?;
        }
        if !ids.is_empty() {
            out.push('\n');
        }

        for (position, cue) in document.cues().iter().enumerate() {
            self.render_cue(position + 1, cue, out)?;
        }
        Ok(())
    }

    /// Render one cue block followed by its blank separator line
    fn render_cue(&self, position: usize, cue: &Cue, out: &mut String) -> fmt::Result {
        if !cue.comments.is_empty() {
            for comment in &cue.comments {
                writeln!(out, "NOTE {comment}")?;
            }
            out.push('\n');
        }

        writeln!(out, "{position}")?;
        write!(
            out,
            "{} --> {}",
            format_timestamp(cue.start),
            format_timestamp(cue.end)
        )?;

        let style = &cue.style;
        let region = cue.region.as_ref().map(|region| region.id.as_str());
        let settings = [
            ("align", style.align.as_deref()),
            ("line", style.line.as_deref()),
            ("position", style.position.as_deref()),
            ("region", region),
            ("size", style.size.as_deref()),
            ("vertical", style.vertical.as_deref()),
        ];
        for (key, value) in settings {
            if let Some(value) = value.filter(|value| !value.is_empty()) {
                write!(out, " {key}:{value}")?;
            }
        }
        out.push('\n');

        for line in &cue.lines {
            self.render_line(line, out)?;
            out.push('\n');
        }
        out.push('\n');
        Ok(())
    }

    /// Render one text line, with voice markup when enabled
    fn render_line(&self, line: &Line, out: &mut String) -> fmt::Result {
        match line.voice() {
            Some(name) if self.options.voice_tags => {
                out.push_str("<v");
                for class in &line.voice_classes {
                    write!(out, ".{class}")?;
                }
                write!(out, " {name}>{}</v>", line.text())
            }
            _ => out.write_str(&line.text()),
        }
    }
}

/// Render one `Region:` line
fn render_region(region: &Region, out: &mut String) -> fmt::Result {
    let style = &region.style;
    write!(out, "Region: id={}", region.id)?;

    if let Some(lines) = style.lines.filter(|&lines| lines != 0) {
        write!(out, " lines={lines}")?;
    }
    let settings = [
        ("regionanchor", style.region_anchor.as_deref()),
        ("scroll", style.scroll.as_deref()),
        ("viewportanchor", style.viewport_anchor.as_deref()),
        ("width", style.width.as_deref()),
    ];
    for (key, value) in settings {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            write!(out, " {key}={value}")?;
        }
    }
    out.push('\n');
    Ok(())
}

/// Serialize a document into a stream with default options
///
/// # Errors
///
/// See [`Writer::write_to`].
pub fn serialize<W: Write>(document: &Document, out: W) -> Result<(), WriteError> {
    Writer::default().write_to(document, out)
}

impl Document {
    /// Serialize the document into a string with default options
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::EmptyDocument`] if the document has no cues.
    pub fn to_vtt_string(&self) -> Result<String, WriteError> {
        let bytes = Writer::default().to_bytes(self)?;
        String::from_utf8(bytes).map_err(|err| WriteError::Io(io::Error::other(err)))
    }
}
