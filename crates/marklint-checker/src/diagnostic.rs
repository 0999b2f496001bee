use std::fmt;

use serde::Serialize;

/// An opening tag that has not been matched by a closing tag yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenTag {
    pub name: String,
    pub line: usize,
}

impl OpenTag {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

/// A structural finding recorded during a scan.
///
/// Findings are data, not errors: the scan itself never fails, it reports.
/// The caller (CLI or test) decides how to render or assert on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A closing tag with no open tag on the stack. Halts the scan.
    UnexpectedClosing { name: String, line: usize },

    /// A closing tag whose name disagrees with the innermost open tag.
    /// Reported, then scanning continues with the stack untouched.
    MismatchedClosing {
        expected: String,
        found: String,
        line: usize,
        opened_line: usize,
    },

    /// Tags still open when the input ran out. At most the five most
    /// recently opened are listed, innermost first.
    UnclosedAtEof { tags: Vec<OpenTag> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnexpectedClosing { name, line } => {
                write!(f, "Error: Unexpected closing tag </{name}> at line {line}")
            }
            Diagnostic::MismatchedClosing {
                expected,
                found,
                line,
                opened_line,
            } => {
                write!(
                    f,
                    "Error: Mismatched closing tag. Expected </{expected}>, \
                     found </{found}> at line {line}. Opened at line {opened_line}"
                )
            }
            Diagnostic::UnclosedAtEof { tags } => {
                write!(f, "Error: Unclosed tags at EOF:")?;
                for tag in tags {
                    write!(f, "\n  <{}> at line {}", tag.name, tag.line)?;
                }
                Ok(())
            }
        }
    }
}
