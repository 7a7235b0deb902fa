//! Extraction orchestrator.
//!
//! Drives one request through the pipeline:
//! validate -> fetch -> parse -> clean -> select root -> normalize.
//! The first failing stage stops the run and becomes the request's
//! [`ExtractionResult`]; later stages never run after a failure.
//!
//! The document tree is not `Send`, so everything after the fetch runs
//! synchronously in [`extract_bytes`] and no tree is held across an await.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::cleaner;
use crate::dom::Document;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::normalize;
use crate::options::Options;
use crate::parser;
use crate::result::{ExtractionResponse, ExtractionResult};
use crate::selector::{self, RootSource};

const MISSING_URL: &str = "URL is required in the request body.";

/// Pipeline stage a request is in.
///
/// Stages run in declaration order. A failure at any stage ends the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Fetching,
    Parsing,
    Cleaning,
    SelectingRoot,
    Normalizing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Parsing => "parsing",
            Self::Cleaning => "cleaning",
            Self::SelectingRoot => "selecting-root",
            Self::Normalizing => "normalizing",
            Self::Done => "done",
        })
    }
}

/// Request body accepted by [`Extractor::handle`]: `{"url": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ExtractRequest {
    /// Parse a JSON request body.
    ///
    /// An empty body is a request without a URL. A body that is not JSON, is
    /// not an object, or carries a non-string `url` is rejected as invalid
    /// input. Unknown fields are ignored.
    pub fn parse(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::InvalidInput(format!("request body is not valid JSON: {e}")))?;
        let Value::Object(mut fields) = value else {
            return Err(Error::InvalidInput("request body must be a JSON object.".to_string()));
        };

        match fields.remove("url") {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::String(url)) => Ok(Self { url: Some(url) }),
            Some(_) => Err(Error::InvalidInput("URL must be a string.".to_string())),
        }
    }
}

/// Runs extraction requests.
///
/// Holds only the HTTP client, so one extractor serves any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Extractor {
    fetcher: Fetcher,
}

impl Extractor {
    /// Create an extractor with the given transport options.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(options)?,
        })
    }

    /// Fetch `url` and extract its main text.
    ///
    /// Never fails: every error is folded into the returned result.
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        match self.run(url).await {
            Ok(text) => {
                info!(url, chars = text.chars().count(), "extraction complete");
                ExtractionResult::success(text)
            }
            Err(err) => {
                if let Error::UpstreamHttp { body_snippet, .. } = &err {
                    error!(url, snippet = %body_snippet, "{err}");
                } else {
                    error!(url, kind = ?err.kind(), "{err}");
                }
                ExtractionResult::from(err)
            }
        }
    }

    /// Handle a raw JSON request body.
    ///
    /// Returns the HTTP status to answer with and the response object.
    pub async fn handle(&self, body: &str) -> (u16, ExtractionResponse) {
        let result = match ExtractRequest::parse(body) {
            Ok(request) => self.extract(request.url.as_deref().unwrap_or_default()).await,
            Err(err) => {
                warn!("{err}");
                ExtractionResult::from(err)
            }
        };

        (result.status_code(), result.into_response())
    }

    async fn run(&self, url: &str) -> Result<String> {
        let url = validate_url(url)?;

        debug!(url, stage = %Stage::Fetching);
        let raw = self.fetcher.fetch(url).await?;

        extract_bytes(&raw.body, raw.content_type.as_deref())
    }
}

/// Reject a missing or blank URL before any I/O happens.
fn validate_url(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::InvalidInput(MISSING_URL.to_string()));
    }
    Ok(url)
}

/// Extract normalized text from raw bytes as received from a server.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the payload is binary.
pub fn extract_bytes(raw: &[u8], content_type: Option<&str>) -> Result<String> {
    debug!(bytes = raw.len(), stage = %Stage::Parsing);
    let doc = parser::parse_bytes(raw, content_type)?;
    Ok(process_document(&doc))
}

/// Extract normalized text from already-decoded markup.
///
/// # Example
///
/// ```rust
/// use rs_scrape_text::extract_html;
///
/// let html = r#"<body><div id="mw-content-text">Hello <script>x()</script>World</div></body>"#;
/// assert_eq!(extract_html(html), "Hello World");
/// ```
#[must_use]
pub fn extract_html(html: &str) -> String {
    debug!(bytes = html.len(), stage = %Stage::Parsing);
    let doc = parser::parse(html);
    process_document(&doc)
}

fn process_document(doc: &Document) -> String {
    debug!(stage = %Stage::Cleaning);
    let report = cleaner::clean(doc);
    debug!(removed = report.removed(), rules = report.hits.len(), "document cleaned");

    debug!(stage = %Stage::SelectingRoot);
    let root = selector::select_root(doc);
    if root.source == RootSource::MainContent {
        debug!(source = %root.source, "extraction root selected");
    } else {
        warn!(source = %root.source, "main content anchor missing, using fallback root");
    }

    debug!(stage = %Stage::Normalizing);
    let text = normalize::normalize(&root.selection);
    debug!(stage = %Stage::Done, chars = text.len());
    text
}
