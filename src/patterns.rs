//! Compiled regex patterns used by the text normalizer.
//!
//! Patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Runs of two or more line-break characters (`\r` or `\n`).
///
/// A match of exactly `"\r\n"` is a single Windows line ending, not a run;
/// see [`is_single_break`].
pub static MULTIPLE_LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\r\n]{2,}").expect("MULTIPLE_LINE_BREAKS regex")
});

/// Whether a [`MULTIPLE_LINE_BREAKS`] match is one `\r\n` line ending.
#[inline]
#[must_use]
pub fn is_single_break(matched: &str) -> bool {
    matched == "\r\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_breaks_do_not_match() {
        assert!(!MULTIPLE_LINE_BREAKS.is_match("a\nb"));
        assert!(!MULTIPLE_LINE_BREAKS.is_match("a\rb"));
    }

    #[test]
    fn crlf_match_is_a_single_break() {
        let m = MULTIPLE_LINE_BREAKS.find("a\r\nb").unwrap();
        assert!(is_single_break(m.as_str()));
    }

    #[test]
    fn mixed_runs_match_as_one() {
        let m = MULTIPLE_LINE_BREAKS.find("a\r\n\n\rb").unwrap();
        assert_eq!(m.as_str(), "\r\n\n\r");
        assert!(!is_single_break(m.as_str()));
    }

    #[test]
    fn two_crlf_pairs_are_a_run() {
        let m = MULTIPLE_LINE_BREAKS.find("a\r\n\r\nb").unwrap();
        assert!(!is_single_break(m.as_str()));
        assert!(!is_single_break("\n\r"));
    }
}
