//! Document model shared by the reader and writer
//!
//! The reader builds a [`Document`] in one pass and the writer consumes it in
//! one pass; callers may also build documents programmatically.
//!
//! # Thread Safety
//!
//! All model types are `Send + Sync`. Regions are shared between cues
//! through `Arc` handles and never mutated after construction.

mod cue;
mod document;
mod line;
mod region;
mod style;

pub use cue::Cue;
pub use document::Document;
pub use line::{Line, LineItem};
pub use region::Region;
pub use style::StyleAttributes;
