//! Text Normalizer
//!
//! Flattens the selected content root to plain text. Text runs are joined in
//! document order exactly as they appear in the source; the only rewriting is
//! collapsing runs of blank lines and trimming the ends.

use regex::Captures;

use crate::dom::{self, Selection};
use crate::patterns::{is_single_break, MULTIPLE_LINE_BREAKS};

/// Flatten `root` and its descendants to normalized text.
///
/// Never fails. An empty string means the page had no extractable text.
#[must_use]
pub fn normalize(root: &Selection) -> String {
    normalize_text(&dom::text_content(root))
}

/// Collapse every run of two or more line breaks into a single blank line
/// (`"\n\n"`) and trim surrounding whitespace. A lone `\r\n` is one line
/// break and stays as it is.
///
/// Idempotent: `normalize_text(&normalize_text(s)) == normalize_text(s)`.
///
/// ```rust
/// use rs_scrape_text::normalize::normalize_text;
///
/// assert_eq!(
///     normalize_text("Just a paragraph.\n\n\n\nAnother."),
///     "Just a paragraph.\n\nAnother."
/// );
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let collapsed = MULTIPLE_LINE_BREAKS.replace_all(text, |caps: &Captures| {
        if is_single_break(&caps[0]) {
            caps[0].to_string()
        } else {
            "\n\n".to_string()
        }
    });
    collapsed
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}
