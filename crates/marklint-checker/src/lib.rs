//! marklint checker
//!
//! Verifies that the tags in a markup/template source are properly nested
//! and closed. Scans the input one line at a time with `marklint-scanner`
//! and tracks open tags on a stack; every structural finding comes back as
//! an ordered list of `Diagnostic` records for the caller to render.
//!
//! # Example
//!
//! ```
//! use marklint_checker::Checker;
//!
//! assert!(Checker::check("<div><span></span></div>").is_empty());
//! assert_eq!(Checker::check("<div>").len(), 1);
//! ```

pub mod checker;
pub mod diagnostic;

pub use checker::Checker;
pub use diagnostic::{Diagnostic, OpenTag};

/// Failure to load the target file. Fatal: no partial scan is attempted.
#[derive(Debug, thiserror::Error)]
#[error("Failed to read {path}: {source}")]
pub struct ReadError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}
