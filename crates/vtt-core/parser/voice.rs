//! Inline voice tag parsing for single cue text lines
//!
//! Recognizes a leading `<v Name>` or `<v.class.list Name>` opening tag. The
//! text runs to the first `</v>`, or to the end of the line when no closing
//! tag exists. A line whose voice span is closed by anything other than
//! `</v>` (for example `</vi>`) is kept verbatim without a voice.

use log::warn;

use crate::model::{Line, LineItem};

/// Opening tag prefix
const OPEN_PREFIX: &str = "<v";
/// Well-formed closing tag
const CLOSE_TAG: &str = "</v>";
/// Prefix shared by well-formed and mismatched closing tags
const CLOSE_PREFIX: &str = "</v";

/// Parsed opening voice tag
struct VoiceTag<'a> {
    /// Dotted classes between `<v` and the name
    classes: Vec<&'a str>,
    /// Speaker name
    name: &'a str,
    /// Everything after the opening `>`
    rest: &'a str,
}

/// Parse the voice markup of one cue text line
///
/// # Examples
///
/// ```rust
/// use vtt_core::parse_voice_tag;
///
/// let line = parse_voice_tag("<v Bob>Correct tag</v>");
/// assert_eq!(line.voice_name.as_deref(), Some("Bob"));
/// assert_eq!(line.text(), "Correct tag");
///
/// let line = parse_voice_tag("<v Bob>Incorrect tag?</vi>");
/// assert_eq!(line.voice_name, None);
/// assert_eq!(line.text(), "<v Bob>Incorrect tag?</vi>");
/// ```
#[must_use]
pub fn parse_voice_tag(text: &str) -> Line {
    let Some(tag) = opening_tag(text) else {
        return plain_line(text);
    };

    let body = if let Some(end) = tag.rest.find(CLOSE_TAG) {
        &tag.rest[..end]
    } else if tag.rest.contains(CLOSE_PREFIX) {
        warn!("voice tag for '{}' closed by a mismatched tag: {text}", tag.name);
        return plain_line(text);
    } else {
        tag.rest
    };

    let mut line = plain_line(body.trim());
    line.voice_name = Some(tag.name.to_string());
    line.voice_classes = tag.classes.into_iter().map(str::to_string).collect();
    line
}

/// Split a leading opening voice tag off the text
fn opening_tag(text: &str) -> Option<VoiceTag<'_>> {
    let after_prefix = text.strip_prefix(OPEN_PREFIX)?;
    let close = after_prefix.find('>')?;
    let inner = &after_prefix[..close];

    let (class_list, name) = inner.split_once(char::is_whitespace)?;
    if !class_list.is_empty() && !class_list.starts_with('.') {
        return None;
    }

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(VoiceTag {
        classes: class_list.split('.').filter(|c| !c.is_empty()).collect(),
        name,
        rest: &after_prefix[close + 1..],
    })
}

/// Line without voice, empty text producing no items
fn plain_line(text: &str) -> Line {
    Line {
        items: if text.is_empty() {
            Vec::new()
        } else {
            vec![LineItem::new(text)]
        },
        ..Line::default()
    }
}
