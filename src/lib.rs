//! # rs-scrape-text
//!
//! Fetches a web page and returns the plain text of its main article body.
//!
//! The pipeline is fixed: fetch the URL, parse the markup, remove known page
//! furniture (scripts, edit links, citations, navigation, footers), pick the
//! main-content element, flatten it to text and collapse blank-line runs.
//! Every outcome, including failures, comes back as an [`ExtractionResult`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # async fn run() {
//! let result = rs_scrape_text::extract("https://en.wikipedia.org/wiki/Rust").await;
//! match result.text() {
//!     Some(text) => println!("{text}"),
//!     None => eprintln!("{}", result.error_message().unwrap_or_default()),
//! }
//! # }
//! ```
//!
//! Markup already in hand skips the network entirely:
//!
//! ```rust
//! let text = rs_scrape_text::extract_html(
//!     r#"<body><div id="mw-content-text">Hello World</div><div class="mw-footer">x</div></body>"#,
//! );
//! assert_eq!(text, "Hello World");
//! ```

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTTP retrieval.
pub mod fetch;

/// Markup parsing from text or raw bytes.
pub mod parser;

/// Removal rules and main-content root selection.
pub mod selector;

/// Boilerplate removal.
pub mod cleaner;

/// Text flattening and whitespace normalization.
pub mod normalize;

// Public API - re-exports
pub use error::{Error, ErrorKind, Result};
pub use extract::{extract_bytes, extract_html, ExtractRequest, Extractor, Stage};
pub use fetch::{Fetcher, RawDocument};
pub use options::Options;
pub use result::{ExtractionResponse, ExtractionResult};

/// Fetch `url` and extract its main text using default options.
///
/// Never fails: network, upstream and parse errors are returned as a
/// failed [`ExtractionResult`].
pub async fn extract(url: &str) -> ExtractionResult {
    extract_with_options(url, &Options::default()).await
}

/// Fetch `url` and extract its main text with custom transport options.
pub async fn extract_with_options(url: &str, options: &Options) -> ExtractionResult {
    match Extractor::new(options) {
        Ok(extractor) => extractor.extract(url).await,
        Err(err) => ExtractionResult::from(err),
    }
}
