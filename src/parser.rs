//! Markup Parser
//!
//! Turns fetched bytes into a document tree. Tree construction is html5ever's
//! permissive HTML parsing (through `dom_query`), so unclosed tags and
//! missing doctypes still produce a usable tree. The only hard failure is a
//! payload that is not text at all.

use crate::dom::{self, Document};
use crate::encoding;
use crate::error::{Error, Result};

/// Leading bytes inspected for NUL bytes.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Media types that can never be tokenized as markup.
const BINARY_MEDIA_PREFIXES: &[&str] = &["image/", "audio/", "video/", "font/"];

const BINARY_MEDIA_TYPES: &[&str] = &[
    "application/octet-stream",
    "application/pdf",
    "application/zip",
    "application/gzip",
    "application/x-gzip",
    "application/x-tar",
    "application/x-7z-compressed",
    "application/x-rar-compressed",
    "application/vnd.rar",
    "application/wasm",
    "application/msword",
];

/// Parse decoded markup. Never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    dom::parse(html)
}

/// Parse raw bytes as delivered by the transport.
///
/// The `content_type` header value, when known, is used both to reject
/// binary payloads and as a charset hint.
///
/// # Example
///
/// ```rust
/// use rs_scrape_text::parser;
///
/// let doc = parser::parse_bytes(b"<p>unclosed <b>markup", Some("text/html")).unwrap();
/// assert_eq!(&*doc.select("b").text(), "markup");
///
/// assert!(parser::parse_bytes(b"\x89PNG\r\n\x1a\n\0\0", None).is_err());
/// ```
pub fn parse_bytes(raw: &[u8], content_type: Option<&str>) -> Result<Document> {
    if let Some(media_type) = content_type.map(media_type).filter(|mt| is_binary_media_type(mt)) {
        return Err(Error::ParseError(format!(
            "payload has non-text content type '{media_type}'"
        )));
    }

    if looks_binary(raw) {
        return Err(Error::ParseError(
            "payload contains binary data and cannot be tokenized as markup".to_string(),
        ));
    }

    let html = encoding::transcode_to_utf8(raw, content_type);
    Ok(parse(&html))
}

/// Lower-cased media type without parameters: `"Text/HTML; charset=x"` -> `"text/html"`.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_binary_media_type(media_type: &str) -> bool {
    BINARY_MEDIA_PREFIXES
        .iter()
        .any(|prefix| media_type.starts_with(prefix))
        || BINARY_MEDIA_TYPES.contains(&media_type)
}

/// NUL bytes never occur in text encodings other than UTF-16/32, which
/// announce themselves with a byte-order mark.
fn looks_binary(raw: &[u8]) -> bool {
    if encoding_rs::Encoding::for_bom(raw).is_some() {
        return false;
    }

    raw[..raw.len().min(BINARY_SNIFF_LEN)].contains(&0)
}
