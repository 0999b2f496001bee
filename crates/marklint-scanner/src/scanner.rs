use crate::tag::{is_void_element, TagKind, TagOccurrence};

/// Per-line tag scanner.
///
/// Walks one sanitized line left to right and yields every tag-like
/// substring as a `TagOccurrence`. A tag is an opening angle bracket, an
/// optional closing slash, a name of letters/digits/hyphens/dots, then
/// everything up to the first closing bracket on the line, with a slash
/// immediately before that bracket marking the tag self-closing.
///
/// The matching strategy lives entirely behind `next_tag`, so the stack
/// tracker in `marklint-checker` never depends on how tags are found.
///
/// Known limitation: the body of a tag ends at the first `>` on the line,
/// so a literal `>` inside a quoted attribute value (for example a
/// comparison inside a JSX expression) terminates the match early and
/// produces a false tag boundary.
pub struct TagScanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl TagScanner {
    /// Create a scanner for one line of source. `line` is the 1-based line
    /// number stamped onto every occurrence.
    pub fn new(source: &str, line: usize) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line,
        }
    }

    /// Scan a whole line and return the occurrences the checker tracks:
    /// void elements and self-closing tags are filtered out, in that order.
    pub fn scan_line(source: &str, line: usize) -> Vec<TagOccurrence> {
        let mut scanner = TagScanner::new(source, line);
        let mut tags = Vec::new();

        while let Some(tag) = scanner.next_tag() {
            if is_void_element(&tag.name) {
                continue;
            }
            if tag.kind == TagKind::SelfClosing {
                continue;
            }
            tags.push(tag);
        }

        tags
    }

    /// Find the next raw tag occurrence, or `None` when the line is
    /// exhausted. No filtering happens here.
    pub fn next_tag(&mut self) -> Option<TagOccurrence> {
        while !self.is_at_end() {
            if self.peek() != '<' {
                self.advance();
                continue;
            }

            let start = self.pos;
            self.advance();

            let closing = self.peek() == '/';
            if closing {
                self.advance();
            }

            let mut name = String::new();
            while is_name_char(self.peek()) {
                name.push(self.peek());
                self.advance();
            }

            if name.is_empty() {
                // Not a tag; rescan from the character after the bracket.
                self.pos = start + 1;
                continue;
            }

            // Consume the attribute body up to the first closing bracket.
            // Anything goes in between, including further opening brackets.
            let mut prev = '\0';
            let mut terminated = false;
            while !self.is_at_end() {
                let ch = self.peek();
                self.advance();
                if ch == '>' {
                    terminated = true;
                    break;
                }
                prev = ch;
            }

            if !terminated {
                // No closing bracket left on this line.
                self.pos = start + 1;
                continue;
            }

            let kind = if closing {
                // A trailing slash is irrelevant on a closing tag.
                TagKind::Closing
            } else if prev == '/' {
                TagKind::SelfClosing
            } else {
                TagKind::Opening
            };

            return Some(TagOccurrence::new(name, kind, self.line));
        }

        None
    }

    // --- Helpers ---

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

/// Tag name characters: ASCII letters, digits, hyphens, dots.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: scan a line with the checker's filters applied.
    fn tags(source: &str) -> Vec<TagOccurrence> {
        TagScanner::scan_line(source, 1)
    }

    /// Helper: scan a line raw, no filtering.
    fn raw(source: &str) -> Vec<TagOccurrence> {
        let mut scanner = TagScanner::new(source, 1);
        let mut out = Vec::new();
        while let Some(tag) = scanner.next_tag() {
            out.push(tag);
        }
        out
    }

    // =========================================================================
    // Basic recognition and classification
    // =========================================================================

    #[test]
    fn test_empty_line() {
        assert_eq!(tags(""), vec![]);
    }

    #[test]
    fn test_no_tags() {
        assert_eq!(tags("plain text, no markup here"), vec![]);
    }

    #[test]
    fn test_opening_tag() {
        assert_eq!(
            tags("<div>"),
            vec![TagOccurrence::new("div", TagKind::Opening, 1)]
        );
    }

    #[test]
    fn test_closing_tag() {
        assert_eq!(
            tags("</div>"),
            vec![TagOccurrence::new("div", TagKind::Closing, 1)]
        );
    }

    #[test]
    fn test_self_closing_is_dropped() {
        assert_eq!(tags("<CustomWidget />"), vec![]);
    }

    #[test]
    fn test_self_closing_raw_kind() {
        assert_eq!(
            raw("<CustomWidget />"),
            vec![TagOccurrence::new("CustomWidget", TagKind::SelfClosing, 1)]
        );
    }

    #[test]
    fn test_opening_tag_with_attributes() {
        assert_eq!(
            tags("<a href=\"/about\" class=\"nav\">"),
            vec![TagOccurrence::new("a", TagKind::Opening, 1)]
        );
    }

    #[test]
    fn test_closing_tag_with_junk_body() {
        // Anything between the name and the bracket is ignored on a close.
        assert_eq!(
            tags("</div foo>"),
            vec![TagOccurrence::new("div", TagKind::Closing, 1)]
        );
    }

    #[test]
    fn test_closing_tag_with_trailing_slash() {
        // The leading slash wins; the trailing one is irrelevant.
        assert_eq!(
            raw("</div/>"),
            vec![TagOccurrence::new("div", TagKind::Closing, 1)]
        );
    }

    #[test]
    fn test_slash_not_adjacent_to_bracket_is_not_self_closing() {
        assert_eq!(
            raw("<a /b>"),
            vec![TagOccurrence::new("a", TagKind::Opening, 1)]
        );
    }

    // =========================================================================
    // Tag names
    // =========================================================================

    #[test]
    fn test_name_with_hyphen_and_dot() {
        assert_eq!(
            tags("<my-widget.inner>"),
            vec![TagOccurrence::new("my-widget.inner", TagKind::Opening, 1)]
        );
    }

    #[test]
    fn test_name_with_digits() {
        assert_eq!(
            tags("<h1>"),
            vec![TagOccurrence::new("h1", TagKind::Opening, 1)]
        );
    }

    #[test]
    fn test_capitalized_component_name() {
        assert_eq!(
            tags("<LeadForm>"),
            vec![TagOccurrence::new("LeadForm", TagKind::Opening, 1)]
        );
    }

    // =========================================================================
    // Void elements
    // =========================================================================

    #[test]
    fn test_void_elements_dropped() {
        assert_eq!(tags("<img><br/><input>"), vec![]);
    }

    #[test]
    fn test_void_closing_form_dropped() {
        // Even an (invalid) closing form of a void element is ignored.
        assert_eq!(tags("</br>"), vec![]);
    }

    #[test]
    fn test_void_with_attributes_dropped() {
        assert_eq!(tags("<img src=\"logo.png\" alt=\"Logo\">"), vec![]);
    }

    // =========================================================================
    // Multiple tags per line, ordering
    // =========================================================================

    #[test]
    fn test_left_to_right_order() {
        assert_eq!(
            tags("<div><span></span></div>"),
            vec![
                TagOccurrence::new("div", TagKind::Opening, 1),
                TagOccurrence::new("span", TagKind::Opening, 1),
                TagOccurrence::new("span", TagKind::Closing, 1),
                TagOccurrence::new("div", TagKind::Closing, 1),
            ]
        );
    }

    #[test]
    fn test_tags_between_text() {
        assert_eq!(
            tags("before <b>bold</b> after"),
            vec![
                TagOccurrence::new("b", TagKind::Opening, 1),
                TagOccurrence::new("b", TagKind::Closing, 1),
            ]
        );
    }

    #[test]
    fn test_line_number_stamped() {
        let found = TagScanner::scan_line("<div>", 42);
        assert_eq!(found[0].line, 42);
    }

    // =========================================================================
    // Malformed and edge-case input
    // =========================================================================

    #[test]
    fn test_bracket_without_name_rescanned() {
        // The first bracket starts no tag; the second does.
        assert_eq!(
            tags("<<div>"),
            vec![TagOccurrence::new("div", TagKind::Opening, 1)]
        );
    }

    #[test]
    fn test_bracket_then_space_is_not_a_tag() {
        assert_eq!(tags("a < b"), vec![]);
    }

    #[test]
    fn test_comparison_operators_ignored() {
        assert_eq!(tags("if (a < b && c > d) {}"), vec![]);
    }

    #[test]
    fn test_unterminated_tag_ignored() {
        assert_eq!(tags("<div class=\"open"), vec![]);
    }

    #[test]
    fn test_body_swallows_inner_bracket() {
        // The body runs to the first closing bracket, consuming the inner
        // opening bracket along the way.
        assert_eq!(
            tags("<a <b>"),
            vec![TagOccurrence::new("a", TagKind::Opening, 1)]
        );
    }

    #[test]
    fn test_quoted_bracket_terminates_early() {
        // Known limitation: the first `>` ends the tag even inside quotes,
        // and the quote remainder yields no further tags.
        assert_eq!(
            tags("<a href=\"x>y\">"),
            vec![TagOccurrence::new("a", TagKind::Opening, 1)]
        );
    }

    #[test]
    fn test_empty_close_is_not_a_tag() {
        assert_eq!(tags("</>"), vec![]);
    }
}
