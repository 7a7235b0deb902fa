//! Error types for rs-scrape-text.
//!
//! Every stage of the pipeline reports failures through [`Error`]. The
//! orchestrator turns them into an [`ExtractionResult`](crate::ExtractionResult)
//! exactly once, so nothing escapes to the caller as a panic.

use serde::{Deserialize, Serialize};

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request carried no usable URL.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The target could not be reached (DNS, refused connection, timeout,
    /// malformed URL, cancelled request).
    #[error("Network error: {0}")]
    Network(String),

    /// The target answered with a non-2xx status.
    ///
    /// `body_snippet` holds the leading characters of the response body for
    /// diagnostics. It is logged, never shown to the end user.
    #[error("Upstream responded with {}", status_line(.status, .status_text))]
    UpstreamHttp {
        status: u16,
        status_text: String,
        body_snippet: String,
    },

    /// The payload could not be tokenized as markup at all.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),
}

impl Error {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Network(_) => ErrorKind::Network,
            Self::UpstreamHttp { .. } => ErrorKind::UpstreamHttp,
            Self::ParseError(_) => ErrorKind::Parse,
        }
    }
}

/// Classification of an extraction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Missing or empty URL.
    InvalidInput,
    /// Transport-level failure reaching the target.
    Network,
    /// Target responded with a non-2xx status.
    UpstreamHttp,
    /// Payload was not tokenizable markup.
    Parse,
}

impl ErrorKind {
    /// HTTP status the relay answers with for this kind of failure.
    #[must_use]
    pub fn status_code(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::Network | Self::UpstreamHttp | Self::Parse => 500,
        }
    }

    /// Short headline placed in the `error` field of the response.
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::InvalidInput => "Bad Request",
            Self::UpstreamHttp => "Failed to scrape content from target URL",
            Self::Network | Self::Parse => "Internal Server Error during scraping",
        }
    }
}

/// `"404 Not Found"`, or just `"599"` when the status has no reason phrase.
pub(crate) fn status_line(status: impl std::fmt::Display, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{status} {status_text}")
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
