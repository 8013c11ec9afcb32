//! Utility functions and shared types for vtt-core
//!
//! Contains the timestamp grammar shared by the reader and writer, hash map
//! helpers for the region table, BOM handling and the crate-wide error type.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::utils::{format_timestamp, parse_timestamp};
//!
//! let start = parse_timestamp("00:02:34.00")?;
//! assert_eq!(format_timestamp(start), "00:02:34.000");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod hashers;
mod time;

pub use errors::{CoreError, ErrorCategory};
pub use hashers::{create_hash_map, create_hash_map_with_capacity, IdMap};
pub use time::{format_timestamp, parse_timestamp};

/// UTF-8 byte order mark as it appears in decoded text
pub const BOM: char = '\u{FEFF}';

/// Strip a leading UTF-8 BOM from text
///
/// Returns the text without BOM and whether one was present.
///
/// ```rust
/// # use vtt_core::utils::strip_bom;
/// assert_eq!(strip_bom("\u{FEFF}WEBVTT"), ("WEBVTT", true));
/// assert_eq!(strip_bom("WEBVTT"), ("WEBVTT", false));
/// ```
#[must_use]
pub fn strip_bom(text: &str) -> (&str, bool) {
    text.strip_prefix(BOM)
        .map_or((text, false), |stripped| (stripped, true))
}
