//! Result types for extraction output.
//!
//! [`ExtractionResult`] is what the pipeline hands back for one request.
//! [`ExtractionResponse`] is the JSON shape an HTTP relay serializes.

use serde::{Deserialize, Serialize};

use crate::error::{status_line, Error, ErrorKind};

/// Outcome of a single extraction request.
///
/// Exactly one of text or error is present. Empty text is a success: the
/// page simply had nothing extractable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Extraction completed.
    Success {
        /// Normalized plain text, possibly empty.
        text: String,
    },
    /// Extraction stopped at some stage.
    Failure {
        /// Classification of the failure.
        kind: ErrorKind,
        /// User-facing explanation.
        message: String,
    },
}

impl ExtractionResult {
    /// Build a successful result.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    /// Build a failed result from a pipeline error.
    ///
    /// Upstream response bodies never leak into the message.
    #[must_use]
    pub fn from_error(err: &Error) -> Self {
        let message = match err {
            Error::InvalidInput(msg) => msg.clone(),
            Error::UpstreamHttp {
                status,
                status_text,
                ..
            } => format!(
                "Status: {}. Target URL might be down or blocking requests.",
                status_line(status, status_text)
            ),
            Error::Network(msg) | Error::ParseError(msg) => {
                format!("An unexpected error occurred: {}.", msg.trim_end_matches('.'))
            }
        };

        Self::Failure {
            kind: err.kind(),
            message,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Extracted text, if the request succeeded.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text } => Some(text),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    /// HTTP status the relay should answer with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.error_kind().map_or(200, ErrorKind::status_code)
    }

    /// Convert into the serializable response object.
    #[must_use]
    pub fn into_response(self) -> ExtractionResponse {
        match self {
            Self::Success { text } => ExtractionResponse {
                success: true,
                full_text: Some(text),
                error: None,
                message: None,
            },
            Self::Failure { kind, message } => ExtractionResponse {
                success: false,
                full_text: None,
                error: Some(kind.headline().to_string()),
                message: Some(message),
            },
        }
    }
}

impl From<Error> for ExtractionResult {
    fn from(err: Error) -> Self {
        Self::from_error(&err)
    }
}

/// Response body as serialized for the caller.
///
/// Success: `{"success": true, "fullText": "..."}`.
/// Failure: `{"success": false, "error": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<ExtractionResult> for ExtractionResponse {
    fn from(result: ExtractionResult) -> Self {
        result.into_response()
    }
}
