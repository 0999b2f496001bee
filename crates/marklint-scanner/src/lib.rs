//! marklint scanner
//!
//! Turns lines of markup/template source into streams of tag occurrences.
//! Handles inline comment stripping, tag-shaped substring detection, and
//! classification into opening, closing, and self-closing tags. Void
//! elements and self-closing tags are filtered out before they reach the
//! balance tracker.
//!
//! # Example
//!
//! ```
//! use marklint_scanner::TagScanner;
//!
//! let tags = TagScanner::scan_line("<div><img></div>", 1);
//! assert_eq!(tags.len(), 2); // <img> is void, never tracked
//! ```

pub mod sanitize;
pub mod scanner;
pub mod tag;

pub use sanitize::strip_comments;
pub use scanner::TagScanner;
pub use tag::{is_void_element, TagKind, TagOccurrence, VOID_ELEMENTS};
