//! Main-Content Selector
//!
//! Picks the element whose text becomes the extraction result: the
//! main-content anchor when the page has one, otherwise `<body>`, otherwise
//! the whole document.

use std::fmt;

use crate::dom::{self, Document, Selection};

/// Identifier of the element holding an article's body text.
pub const MAIN_CONTENT_ID: &str = "mw-content-text";

/// Which branch produced the extraction root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// The element with id [`MAIN_CONTENT_ID`].
    MainContent,
    /// The `<body>` element.
    Body,
    /// The document node (no body in the tree).
    Document,
}

impl fmt::Display for RootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MainContent => "main-content",
            Self::Body => "body",
            Self::Document => "document",
        })
    }
}

/// The selected extraction root.
#[derive(Clone)]
pub struct ContentRoot<'a> {
    pub selection: Selection<'a>,
    pub source: RootSource,
}

/// Locate the extraction root in a (cleaned) document.
///
/// Never fails: a page without the anchor is the normal fallback case.
///
/// # Example
///
/// ```rust
/// use rs_scrape_text::dom;
/// use rs_scrape_text::selector::{select_root, RootSource};
///
/// let doc = dom::parse(r#"<body><p>nav</p><div id="mw-content-text">Article</div></body>"#);
/// let root = select_root(&doc);
///
/// assert_eq!(root.source, RootSource::MainContent);
/// assert_eq!(&*dom::text_content(&root.selection), "Article");
/// ```
#[must_use]
pub fn select_root(doc: &Document) -> ContentRoot<'_> {
    if let Some(selection) = dom::element_by_id(doc, MAIN_CONTENT_ID) {
        return ContentRoot {
            selection,
            source: RootSource::MainContent,
        };
    }

    match dom::body(doc) {
        Some(selection) => ContentRoot {
            selection,
            source: RootSource::Body,
        },
        None => ContentRoot {
            selection: dom::document_root(doc),
            source: RootSource::Document,
        },
    }
}
