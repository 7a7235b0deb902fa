//! Fetcher
//!
//! Retrieves a document over HTTP(S) with `reqwest`. No retries and no
//! special redirect handling: the transport's defaults apply. Failures are
//! classified into network errors (the target could not be reached) and
//! upstream errors (the target answered with a non-2xx status).

use std::error::Error as StdError;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::options::Options;

/// A successfully fetched document, before parsing.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// URL after redirects.
    pub url: Url,
    pub status: u16,
    /// `Content-Type` header value, if the server sent one.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// HTTP client wrapper that performs one GET per call.
///
/// Cheap to clone and safe to share between concurrent requests; it holds no
/// per-request state.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    snippet_chars: usize,
}

impl Fetcher {
    /// Build a fetcher from transport options.
    pub fn new(options: &Options) -> Result<Self> {
        let mut builder = Client::builder().user_agent(options.user_agent.as_str());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = options.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Network(format!("failed to build HTTP client: {}", describe(&e))))?;

        Ok(Self {
            client,
            snippet_chars: options.diagnostic_snippet_chars,
        })
    }

    /// GET `url` and return its body.
    ///
    /// A URL that does not parse is reported as a network error: it is the
    /// transport that cannot use it.
    pub async fn fetch(&self, url: &str) -> Result<RawDocument> {
        let target = Url::parse(url).map_err(|e| Error::Network(format!("invalid URL '{url}': {e}")))?;

        debug!(url = %target, "sending request");
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        let status = response.status();
        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value: &HeaderValue| value.to_str().ok())
            .map(str::to_string);
        debug!(status = status.as_u16(), url = %final_url, ?content_type, "response received");

        if !status.is_success() {
            // A body that fails to arrive only costs us the diagnostic snippet
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamHttp {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body_snippet: truncate_chars(&body, self.snippet_chars),
            });
        }

        let body = response.bytes().await.map_err(|e| network_error(&e))?;

        Ok(RawDocument {
            url: final_url,
            status: status.as_u16(),
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Classify a transport error, keeping the underlying cause in the message.
fn network_error(err: &reqwest::Error) -> Error {
    let detail = describe(err);
    let message = if err.is_timeout() {
        format!("request timed out: {detail}")
    } else if err.is_connect() {
        format!("connection failed: {detail}")
    } else {
        detail
    };
    Error::Network(message)
}

/// Render an error together with its chain of sources.
///
/// reqwest's own message ("error sending request for url ...") hides the
/// actual cause (refused, DNS, TLS) one or two levels down.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// First `max_chars` characters of `text`, never splitting a character.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
