use rs_scrape_text::selector::{RemovalRule, DENYLIST};
use rs_scrape_text::{cleaner, dom, extract_html};

/// Markup for one element matched by `rule`, carrying `marker` as its text.
fn matching_element(rule: &RemovalRule, marker: &str) -> String {
    let selector = rule.selector;

    if let Some(nested) = selector.strip_prefix(".mw-parser-output .") {
        format!(r#"<div class="mw-parser-output"><div class="{nested}">{marker}</div></div>"#)
    } else if let Some(class) = selector.strip_prefix('.') {
        format!(r#"<div class="{class}">{marker}</div>"#)
    } else if let Some(id) = selector.strip_prefix('#') {
        format!(r#"<div id="{id}">{marker}</div>"#)
    } else if selector.chars().all(|c| c.is_ascii_alphabetic()) {
        format!("<{selector}>{marker}</{selector}>")
    } else {
        panic!("no markup builder for selector {selector:?}");
    }
}

#[test]
fn every_rule_removes_its_element_inside_main_content() {
    for (index, rule) in DENYLIST.iter().enumerate() {
        let marker = format!("MARKER_{index}");
        let html = format!(
            r#"<html><body><div id="mw-content-text"><p>Kept prose</p>{}</div></body></html>"#,
            matching_element(rule, &marker)
        );

        let text = extract_html(&html);

        assert!(!text.contains(&marker), "{:?} left {marker:?} in {text:?}", rule.selector);
        assert_eq!(text, "Kept prose", "{:?}", rule.selector);
    }
}

#[test]
fn every_rule_removes_its_element_in_body_fallback() {
    for (index, rule) in DENYLIST.iter().enumerate() {
        let marker = format!("MARKER_{index}");
        let html = format!(
            "<html><body><p>Kept prose</p>{}</body></html>",
            matching_element(rule, &marker)
        );

        let text = extract_html(&html);

        assert!(!text.contains(&marker), "{:?} left {marker:?} in {text:?}", rule.selector);
    }
}

#[test]
fn every_rule_reports_its_own_hit() {
    for rule in DENYLIST {
        let doc = dom::parse(&format!("<body>{}</body>", matching_element(rule, "x")));

        let report = cleaner::clean(&doc);

        let hit = report
            .hits
            .iter()
            .find(|hit| hit.selector == rule.selector)
            .unwrap_or_else(|| panic!("{:?} matched nothing", rule.selector));
        assert_eq!(hit.removed, 1, "{:?}", rule.selector);
        assert_eq!(hit.category, rule.category);
    }
}
