//! Streaming WebVTT reader
//!
//! Skips everything up to the `WEBVTT` header, then drives the block state
//! machine of [`super::block`] over the remaining lines. Pending comments and
//! the pending cue identifier survive blank lines and are consumed by the
//! next timing line.

use std::io::{BufRead, Lines};
use std::sync::Arc;

use log::{debug, trace, warn};

use super::{
    block::{BlockKind, LineKind},
    settings::{parse_cue_settings, parse_region},
    voice::parse_voice_tag,
    ParseError,
};
use crate::model::{Cue, Document};
use crate::utils::{parse_timestamp, strip_bom, CoreError};

/// Header token that starts the body
const HEADER: &str = "WEBVTT";

/// Line reader holding the block state machine
pub struct Reader<B> {
    /// Source lines
    lines: Lines<B>,
    /// 1-based number of the last line read
    line: usize,
    /// Document under construction
    document: Document,
    /// Current interpretation mode
    block: BlockKind,
    /// Comments waiting for the next cue
    pending_comments: Vec<String>,
    /// Identifier waiting for the next cue
    pending_index: usize,
}

impl<B: BufRead> Reader<B> {
    /// Create a reader over buffered input
    pub fn new(input: B) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
            document: Document::new(),
            block: BlockKind::None,
            pending_comments: Vec::new(),
            pending_index: 0,
        }
    }

    /// Read the whole stream into a document
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial document
    /// is produced.
    pub fn read(mut self) -> Result<Document, ParseError> {
        if !self.skip_header()? {
            debug!("no {HEADER} header after {} lines, returning empty document", self.line);
            return Ok(self.document);
        }

        while let Some(raw) = self.next_line()? {
            self.process(raw.trim())?;
        }

        debug!(
            "parsed {} cues and {} regions from {} lines",
            self.document.cues().len(),
            self.document.regions().len(),
            self.line
        );
        Ok(self.document)
    }

    /// Fetch the next line, counting it
    fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        let next = self.lines.next().transpose()?;
        if next.is_some() {
            self.line += 1;
        }
        Ok(next)
    }

    /// Consume lines up to and including the header, returning whether it was found
    fn skip_header(&mut self) -> Result<bool, ParseError> {
        while let Some(raw) = self.next_line()? {
            let (text, _) = strip_bom(&raw);
            if text.split_whitespace().next() == Some(HEADER) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Apply one trimmed body line
    fn process(&mut self, text: &str) -> Result<(), ParseError> {
        let kind = LineKind::classify(text);
        trace!("line {}: {kind:?} in {:?} block", self.line, self.block);

        match kind {
            LineKind::Comment(comment) => self.pending_comments.push(comment.to_string()),
            LineKind::Blank | LineKind::Style => {}
            LineKind::Region(declaration) => {
                let region = parse_region(declaration, self.line)?;
                if let Some(previous) = self.document.insert_region(Arc::new(region)) {
                    warn!(
                        "line {}: region '{}' declared again, replacing the earlier one",
                        self.line, previous.id
                    );
                }
            }
            LineKind::Timing { start, rest } => self.start_cue(start, rest)?,
            LineKind::Content(content) => self.content(content),
        }

        self.block = self.block.after(&kind);
        Ok(())
    }

    /// Create a cue from a timing line
    fn start_cue(&mut self, start: &str, rest: &str) -> Result<(), ParseError> {
        let mut tokens = rest.split_whitespace();
        let end = tokens.next().unwrap_or_default();

        let start = self.timestamp(start)?;
        let end = self.timestamp(end)?;
        let settings = parse_cue_settings(tokens, self.document.regions(), self.line)?;

        let cue = Cue {
            index: core::mem::take(&mut self.pending_index),
            start,
            end,
            comments: core::mem::take(&mut self.pending_comments),
            style: settings.style,
            region: settings.region,
            lines: Vec::new(),
        };
        self.document.push_cue(cue);
        Ok(())
    }

    /// Interpret a content line according to the current block
    fn content(&mut self, content: &str) {
        match self.block {
            BlockKind::Comment => self.pending_comments.push(content.to_string()),
            BlockKind::Style => trace!("line {}: skipping style content", self.line),
            BlockKind::Text => {
                if let Some(cue) = self.document.cues_mut().last_mut() {
                    cue.lines.push(parse_voice_tag(content));
                }
            }
            BlockKind::None => self.pending_index = content.parse().unwrap_or(0),
        }
    }

    /// Parse a timestamp, attaching the current line on failure
    fn timestamp(&self, text: &str) -> Result<core::time::Duration, ParseError> {
        parse_timestamp(text).map_err(|err| {
            let reason = match err {
                CoreError::InvalidTime(reason) => reason,
                other => other.to_string(),
            };
            ParseError::InvalidTimestamp {
                timestamp: text.trim().to_string(),
                line: self.line,
                reason,
            }
        })
    }
}
