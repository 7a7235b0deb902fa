//! Selector Infrastructure
//!
//! Removal rules used by the content cleaner and the main-content anchor used
//! to pick the extraction root. Both are fixed data compiled into the crate.

use crate::dom::{self, Document, Selection};

pub mod content;
pub mod denylist;

pub use content::{select_root, ContentRoot, RootSource, MAIN_CONTENT_ID};
pub use denylist::DENYLIST;

/// What kind of page furniture a removal rule targets.
///
/// Only used for diagnostics; every category is removed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Inline `<script>` and `<style>` blocks.
    ScriptStyle,
    /// Hatnotes and article message boxes.
    EditorialNotice,
    /// "[edit]" links beside headings.
    SectionEdit,
    /// Reference lists, their wrappers and cite backlinks.
    References,
    TableOfContents,
    /// Headings such as "See also" addressed by their anchor id.
    NamedSection,
    Footer,
    CategoryLinks,
    PageIndicators,
    JumpLinks,
    Sidebar,
    /// Site and content subtitle banners.
    Subtitle,
    Navigation,
    LanguageSwitcher,
    /// Namespace, view, personal, search and toolbox portlets.
    PageControls,
    PrintExport,
}

/// A CSS selector identifying elements to excise, together with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalRule {
    pub selector: &'static str,
    pub category: RuleCategory,
}

impl RemovalRule {
    #[must_use]
    pub const fn new(selector: &'static str, category: RuleCategory) -> Self {
        Self { selector, category }
    }

    /// Whether the selector parses as CSS.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        dom::is_valid_selector(self.selector)
    }
}

/// Query for all elements matching the rule, anywhere in the document,
/// in document order.
///
/// A rule matching nothing yields an empty selection.
///
/// # Example
///
/// ```rust
/// use rs_scrape_text::dom;
/// use rs_scrape_text::selector::{self, RemovalRule, RuleCategory};
///
/// let doc = dom::parse(r#"<div><div class="reflist">1</div><p>text</p></div>"#);
/// let rule = RemovalRule::new(".reflist", RuleCategory::References);
///
/// assert_eq!(selector::query_all(&doc, &rule).length(), 1);
/// ```
#[must_use]
pub fn query_all<'a>(doc: &'a Document, rule: &RemovalRule) -> Selection<'a> {
    dom::query_selector_all(doc, rule.selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_all_finds_nested_matches() {
        let doc = dom::parse(
            r#"
            <div class="mw-parser-output">
                <div class="hatnote">Top note</div>
                <section><div class="hatnote">Nested note</div></section>
            </div>
            <div class="hatnote">Outside the parser output</div>
        "#,
        );
        let rule = RemovalRule::new(".mw-parser-output .hatnote", RuleCategory::EditorialNotice);

        let matches = query_all(&doc, &rule);
        assert_eq!(matches.length(), 2);
        assert!(!dom::text_content(&matches).contains("Outside"));
    }

    #[test]
    fn test_query_all_returns_empty_when_no_matches() {
        let doc = dom::parse("<div><p>content</p></div>");
        let rule = RemovalRule::new("#toc", RuleCategory::TableOfContents);

        assert!(query_all(&doc, &rule).is_empty());
    }

    #[test]
    fn test_query_all_preserves_document_order() {
        let doc = dom::parse(
            r#"<p class="sidebar">1</p><section><p class="sidebar">2</p></section><p class="sidebar">3</p>"#,
        );
        let rule = RemovalRule::new(".sidebar", RuleCategory::Sidebar);

        let texts: Vec<String> = query_all(&doc, &rule)
            .nodes()
            .iter()
            .map(|node| dom::text_content(&Selection::from(*node)).to_string())
            .collect();
        assert_eq!(texts, ["1", "2", "3"]);
    }

    #[test]
    fn test_invalid_selector_detected() {
        assert!(RemovalRule::new("#toc", RuleCategory::TableOfContents).is_valid());
        assert!(!RemovalRule::new("!!", RuleCategory::Sidebar).is_valid());
    }
}
