//! Error path tests for the reader
//!
//! Every structural failure aborts the parse and reports the 1-based line
//! it was found on.

use std::io::{self, Read};

use vtt_core::{parse, CoreError, Document, ParseError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Reader that fails after yielding a prefix of valid input
struct FailingReader {
    prefix: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.prefix.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset"));
        }
        let count = self.prefix.len().min(buf.len());
        buf[..count].copy_from_slice(&self.prefix[..count]);
        self.prefix = &self.prefix[count..];
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Region token without `=`
    #[test]
    fn test_malformed_region_attribute() {
        init_logging();
        let err = Document::parse_str("WEBVTT\n\nRegion: id=a broken\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedRegionAttribute {
                line: 3,
                token: "broken".to_string(),
            }
        );
    }

    /// Non-numeric `lines` value
    #[test]
    fn test_invalid_integer_attribute() {
        let text = "WEBVTT\n\nNOTE regions follow\n\nRegion: id=fred lines=x\n";
        let err = Document::parse_str(text).unwrap_err();
        assert_eq!(err.line(), Some(5));
        assert!(matches!(
            err,
            ParseError::InvalidIntegerAttribute { ref key, ref value, .. } if key == "lines" && value == "x"
        ));
    }

    /// Cue setting token without `:`
    #[test]
    fn test_malformed_style_attribute() {
        let err = Document::parse_str("WEBVTT\n\n1\n00:01.000 --> 00:02.000 align\nx\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedStyleAttribute {
                line: 4,
                token: "align".to_string(),
            }
        );
        assert!(err.to_string().starts_with("line 4:"));
    }

    /// Cue referencing a region declared nowhere, or declared later
    #[test]
    fn test_unknown_region_reference() {
        let err = Document::parse_str("WEBVTT\n\n00:01.000 --> 00:02.000 region:unknown\nx\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownRegionReference {
                line: 3,
                region: "unknown".to_string(),
            }
        );

        let late = "WEBVTT\n\n00:01.000 --> 00:02.000 region:a\nx\n\nRegion: id=a\n";
        assert!(matches!(
            Document::parse_str(late).unwrap_err(),
            ParseError::UnknownRegionReference { line: 3, .. }
        ));
    }

    /// Unparsable start and end timestamps
    #[test]
    fn test_invalid_timestamps() {
        for (text, bad) in [
            ("WEBVTT\n\naa:01.000 --> 00:02.000\n", "aa:01.000"),
            ("WEBVTT\n\n00:01.000 --> 00:02.0000\n", "00:02.0000"),
            ("WEBVTT\n\n1:2:3:4.000 --> 00:02.000\n", "1:2:3:4.000"),
            ("WEBVTT\n\n00:01.000 --> align:left\n", "align:left"),
        ] {
            match Document::parse_str(text) {
                Err(ParseError::InvalidTimestamp { timestamp, line, .. }) => {
                    assert_eq!(timestamp, bad);
                    assert_eq!(line, 3);
                }
                other => panic!("expected timestamp error for {text:?}, got {other:?}"),
            }
        }
    }

    /// The first error wins and nothing is returned for the document
    #[test]
    fn test_first_error_aborts() {
        let text = "WEBVTT\n\n00:01.000 --> 00:02.000\nfine\n\n00:03.000 --> 00:04.000 bad\n\nRegion: id=x lines=y\n";
        let err = Document::parse_str(text).unwrap_err();
        assert_eq!(err.line(), Some(6));
    }

    /// Errors before the header are impossible because nothing is interpreted
    #[test]
    fn test_garbage_before_header_is_ignored() {
        let text = "Region: id=a lines=x\n00:01 --> bogus align\nWEBVTT\n";
        assert!(Document::parse_str(text).expect("parses").is_empty());
    }

    /// Stream failures surface as I/O errors without a line
    #[test]
    fn test_stream_failure() {
        let err = parse(FailingReader {
            prefix: b"WEBVTT\n\n00:01.000 --> 00:02.000\nx\n",
        })
        .unwrap_err();

        assert!(matches!(err, ParseError::Io { ref message } if message.contains("stream reset")));
        assert_eq!(err.line(), None);

        let core: CoreError = err.into();
        assert!(!core.is_recoverable());
    }

    /// Invalid UTF-8 is reported as an I/O error
    #[test]
    fn test_invalid_utf8() {
        let err = parse(&b"WEBVTT\n\n\xff\xfe\n"[..]).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
