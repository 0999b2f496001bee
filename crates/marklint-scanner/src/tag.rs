/// How a tag occurrence relates to the open-tag stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<div>` — pushes onto the stack.
    Opening,
    /// `</div>` — pops (or fails to pop) the stack.
    Closing,
    /// `<Widget />` — opens and closes atomically, never tracked.
    SelfClosing,
}

/// A single tag mention detected on one line of source.
///
/// Produced transiently by the scanner; line numbers are 1-based so they
/// match what an editor shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence {
    pub name: String,
    pub kind: TagKind,
    pub line: usize,
}

impl TagOccurrence {
    pub fn new(name: impl Into<String>, kind: TagKind, line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
        }
    }
}

/// Void elements (never require a closing tag, ignored by the checker).
pub const VOID_ELEMENTS: &[&str] = &["img", "input", "br", "hr", "col", "source"];

/// Check if a tag name is a void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
