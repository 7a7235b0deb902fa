//! Content Cleaner
//!
//! Detaches every element matched by a removal rule, together with its
//! descendants, before the extraction root is chosen.

use crate::dom::{self, Document};
use crate::selector::{self, RemovalRule, RuleCategory, DENYLIST};

/// Number of elements one rule detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub selector: &'static str,
    pub category: RuleCategory,
    pub removed: usize,
}

/// Diagnostic summary of a cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Rules that matched at least one element, in rule order.
    pub hits: Vec<RuleHit>,
}

impl CleanReport {
    /// Total number of elements detached.
    ///
    /// Elements that went away with an ancestor matched by an earlier rule
    /// are not counted again.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.hits.iter().map(|hit| hit.removed).sum()
    }
}

/// Clean the document in place with the built-in [`DENYLIST`].
pub fn clean(doc: &Document) -> CleanReport {
    clean_with_rules(doc, DENYLIST)
}

/// Clean the document in place with an explicit rule list.
///
/// For each rule in order, every matching element anywhere in the tree is
/// removed with its subtree. A rule matching nothing is a no-op.
///
/// # Example
///
/// ```rust
/// use rs_scrape_text::{cleaner, dom};
///
/// let doc = dom::parse(r#"<p>Body<sup class="reflist">[1]</sup></p><script>x()</script>"#);
/// let report = cleaner::clean(&doc);
///
/// assert_eq!(report.removed(), 2);
/// assert_eq!(&*dom::text_content(&doc.select("body")), "Body");
/// ```
pub fn clean_with_rules(doc: &Document, rules: &[RemovalRule]) -> CleanReport {
    let mut report = CleanReport::default();

    for rule in rules {
        let matched = selector::query_all(doc, rule);
        let removed = matched.length();
        if removed == 0 {
            continue;
        }

        dom::remove(&matched);
        report.hits.push(RuleHit {
            selector: rule.selector,
            category: rule.category,
            removed,
        });
    }

    report
}
