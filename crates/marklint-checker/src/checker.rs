//! Balance tracker for tag occurrences.
//!
//! Drives the scanner over the source line by line and maintains the stack
//! of currently-open tags. Opening tags push, matching closing tags pop,
//! and three kinds of structural findings are recorded along the way:
//! unexpected closes (which halt the scan), mismatched closes (reported,
//! then ignored so later real errors can still surface), and tags left
//! open at end of input.

use std::path::Path;

use marklint_scanner::{strip_comments, TagKind, TagOccurrence, TagScanner};

use crate::diagnostic::{Diagnostic, OpenTag};
use crate::ReadError;

/// Tags listed in an end-of-input diagnostic, most recent first.
const UNCLOSED_REPORT_LIMIT: usize = 5;

/// Tag balance checker.
///
/// One checker instance scans one source text. The stack holds exactly the
/// currently-open, non-void tags in nesting order; the top is the
/// innermost. Use the `check`/`check_file` entry points rather than
/// constructing one directly.
pub struct Checker {
    stack: Vec<OpenTag>,
    diagnostics: Vec<Diagnostic>,
}

impl Checker {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan source text and return the diagnostics in the order they were
    /// found. An empty result means the input is balanced.
    pub fn check(source: &str) -> Vec<Diagnostic> {
        let mut checker = Checker::new();
        checker.run(source);
        checker.diagnostics
    }

    /// Read a file as UTF-8 and scan it. Missing or undecodable files fail
    /// fast with the path in the error; no partial scan happens.
    pub fn check_file(path: &Path) -> Result<Vec<Diagnostic>, ReadError> {
        let source = std::fs::read_to_string(path).map_err(|e| ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::check(&source))
    }

    fn run(&mut self, source: &str) {
        for (index, raw_line) in source.lines().enumerate() {
            let line = strip_comments(raw_line);
            for tag in TagScanner::scan_line(&line, index + 1) {
                if !self.track(tag) {
                    // Unexpected close: stop scanning entirely, no
                    // end-of-input report.
                    return;
                }
            }
        }
        self.finish();
    }

    /// Process one occurrence. Returns `false` when the scan must halt.
    fn track(&mut self, tag: TagOccurrence) -> bool {
        match tag.kind {
            TagKind::Opening => {
                self.stack.push(OpenTag::new(tag.name, tag.line));
                true
            }
            TagKind::Closing => self.track_closing(tag),
            // Filtered out by the scanner before tracking.
            TagKind::SelfClosing => true,
        }
    }

    fn track_closing(&mut self, tag: TagOccurrence) -> bool {
        match self.stack.last() {
            None => {
                self.diagnostics.push(Diagnostic::UnexpectedClosing {
                    name: tag.name,
                    line: tag.line,
                });
                false
            }
            Some(top) if top.name == tag.name => {
                self.stack.pop();
                true
            }
            Some(top) => {
                // Recovery by ignoring: the entry stays on the stack, which
                // may cascade into further mismatches downstream.
                self.diagnostics.push(Diagnostic::MismatchedClosing {
                    expected: top.name.clone(),
                    found: tag.name,
                    line: tag.line,
                    opened_line: top.line,
                });
                true
            }
        }
    }

    fn finish(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        let tags = self
            .stack
            .iter()
            .rev()
            .take(UNCLOSED_REPORT_LIMIT)
            .cloned()
            .collect();
        self.diagnostics.push(Diagnostic::UnclosedAtEof { tags });
    }
}
