//! Boilerplate Denylist
//!
//! Page furniture of reference-encyclopedia pages (MediaWiki skins) that is
//! not part of an article's narrative: scripts, notices, edit links,
//! citations, tables of contents, trailing sections and site chrome.
//!
//! The list is static and ordered. Matches are independent of each other, so
//! the order only affects diagnostics.

use super::{RemovalRule, RuleCategory};

/// The fixed, ordered list of removal rules applied to every document.
pub static DENYLIST: &[RemovalRule] = &[
    // Inline code and styling
    RemovalRule::new("script", RuleCategory::ScriptStyle),
    RemovalRule::new("style", RuleCategory::ScriptStyle),
    // "For broader coverage..." notes and "This article needs citations" boxes
    RemovalRule::new(".mw-parser-output .hatnote", RuleCategory::EditorialNotice),
    RemovalRule::new(".mw-parser-output .ambox", RuleCategory::EditorialNotice),
    RemovalRule::new(".mw-editsection", RuleCategory::SectionEdit),
    RemovalRule::new(".reflist", RuleCategory::References),
    RemovalRule::new(".mw-references-columns", RuleCategory::References),
    RemovalRule::new(".mw-references-wrap", RuleCategory::References),
    RemovalRule::new(".mw-cite-backlink", RuleCategory::References),
    RemovalRule::new("#toc", RuleCategory::TableOfContents),
    // Trailing sections, addressed by their heading anchors
    RemovalRule::new("#See_also", RuleCategory::NamedSection),
    RemovalRule::new("#References", RuleCategory::NamedSection),
    RemovalRule::new("#Further_reading", RuleCategory::NamedSection),
    RemovalRule::new("#External_links", RuleCategory::NamedSection),
    RemovalRule::new(".mw-footer", RuleCategory::Footer),
    RemovalRule::new("#catlinks", RuleCategory::CategoryLinks),
    RemovalRule::new(".mw-indicators", RuleCategory::PageIndicators),
    RemovalRule::new(".mw-jump-link", RuleCategory::JumpLinks),
    RemovalRule::new(".sidebar", RuleCategory::Sidebar),
    RemovalRule::new("#siteSub", RuleCategory::Subtitle),
    RemovalRule::new("#contentSub", RuleCategory::Subtitle),
    RemovalRule::new("#mw-navigation", RuleCategory::Navigation),
    RemovalRule::new("#p-lang-btn", RuleCategory::LanguageSwitcher),
    RemovalRule::new("#p-namespaces", RuleCategory::PageControls),
    RemovalRule::new("#p-views", RuleCategory::PageControls),
    RemovalRule::new("#p-personal", RuleCategory::PageControls),
    RemovalRule::new("#p-search", RuleCategory::PageControls),
    RemovalRule::new("#p-tb", RuleCategory::PageControls),
    RemovalRule::new("#p-coll-print_export", RuleCategory::PrintExport),
];
