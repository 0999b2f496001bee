//! Line sanitizer.
//!
//! Strips inline comment spans from a line before it reaches the tag
//! scanner, so commented-out markup never lands on the open-tag stack.
//! Only spans opened and closed on the same line are recognized; a comment
//! that continues onto a later line is scanned as ordinary markup (known
//! limitation).

/// Comment marker pairs removed by `strip_comments`.
///
/// JSX-style `{/* ... */}` and HTML-style `<!-- ... -->`.
const COMMENT_MARKERS: &[(&str, &str)] = &[("{/*", "*/}"), ("<!--", "-->")];

/// Remove every inline comment span from a single line.
///
/// Each span is matched non-greedily: it ends at the first closing marker
/// after its opener. An opener with no closer on the same line is left
/// untouched. Spans are removed in a single left-to-right pass per marker
/// pair; text spliced together by a removal is not rescanned.
pub fn strip_comments(line: &str) -> String {
    let mut out = line.to_string();

    for (open, close) in COMMENT_MARKERS {
        let mut result = String::with_capacity(out.len());
        let mut rest = out.as_str();

        while let Some(start) = rest.find(open) {
            let Some(len) = rest[start + open.len()..].find(close) else {
                break;
            };
            result.push_str(&rest[..start]);
            rest = &rest[start + open.len() + len + close.len()..];
        }

        result.push_str(rest);
        out = result;
    }

    out
}
