//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. The rest of the crate goes
//! through these functions so the tree library stays an implementation
//! detail of this module.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of the first node in the selection
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants, in document order.
///
/// Comment nodes do not contribute. Returns `StrTendril` so callers can
/// borrow it as `&str` without copying.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Querying ===

/// Query all elements matching a CSS selector anywhere in the document
///
/// `selector` must be valid CSS; [`RemovalRule::is_valid`](crate::selector::RemovalRule::is_valid)
/// checks a rule ahead of time.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(doc: &'a Document, selector: &str) -> Selection<'a> {
    doc.select(selector)
}

/// Whether `selector` parses as CSS
#[inline]
#[must_use]
pub fn is_valid_selector(selector: &str) -> bool {
    dom_query::Matcher::new(selector).is_ok()
}

/// First element (in document order) whose `id` equals `id`
#[must_use]
pub fn element_by_id<'a>(doc: &'a Document, id: &str) -> Option<Selection<'a>> {
    let found = doc.select(&format!("[id=\"{}\"]", id.replace('"', "\\\"")));
    found.exists().then(|| found.first())
}

/// The `<body>` element, if the document has one
#[must_use]
pub fn body(doc: &Document) -> Option<Selection<'_>> {
    let body = doc.select("body");
    body.exists().then(|| body.first())
}

/// The document node itself
#[inline]
#[must_use]
pub fn document_root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

// === Tree Manipulation ===

/// Detach every element in the selection, with all descendants, from its parent
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

// === Parsing ===

/// Parse HTML string into document
///
/// Parsing never fails: malformed markup produces a best-effort tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(tag_name(&div), Some("div".to_string()));
    }

    #[test]
    fn test_is_valid_selector() {
        assert!(is_valid_selector(".mw-parser-output .hatnote"));
        assert!(is_valid_selector("#p-coll-print_export"));
        assert!(!is_valid_selector("!!"));
    }

    #[test]
    fn test_remove_elements() {
        let doc = parse(r#"<div><span class="ad">ad <b>bold</b></span><p>content</p></div>"#);

        remove(&query_selector_all(&doc, ".ad"));

        assert!(doc.select(".ad").is_empty());
        assert!(doc.select("b").is_empty());
        assert!(!doc.select("p").is_empty());
    }

    #[test]
    fn test_text_content_concatenates_without_separators() {
        let doc = parse(r#"<div>text<span>nested</span> more<!-- hidden --></div>"#);
        let div = doc.select("div");

        assert_eq!(&*text_content(&div), "textnested more");
    }

    #[test]
    fn test_element_by_id_returns_first_match() {
        let doc = parse(r#"<p id="x">first</p><p id="x">second</p>"#);

        let found = element_by_id(&doc, "x").unwrap();
        assert_eq!(&*text_content(&found), "first");
        assert!(element_by_id(&doc, "missing").is_none());
    }

    #[test]
    fn test_body_is_synthesized_for_fragments() {
        let doc = parse("just text");
        let body = body(&doc).unwrap();

        assert_eq!(tag_name(&body), Some("body".to_string()));
        assert_eq!(&*text_content(&body), "just text");
    }

    #[test]
    fn test_document_root_contains_everything() {
        let doc = parse("<html><head><title>T</title></head><body>B</body></html>");
        let root = document_root(&doc);

        assert_eq!(&*text_content(&root), "TB");
    }

    #[test]
    fn test_operations_on_empty_selection() {
        let doc = parse(r#"<div>content</div>"#);
        let empty = doc.select("span");

        remove(&empty);

        assert_eq!(&*text_content(&empty), "");
        assert_eq!(&*text_content(&doc.select("div")), "content");
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let doc = parse("<p>text<div>more");

        assert_eq!(&*text_content(&body(&doc).unwrap()), "textmore");
    }
}
