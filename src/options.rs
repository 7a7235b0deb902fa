//! Configuration options for fetching and extraction.
//!
//! Only transport concerns are configurable. The boilerplate denylist and the
//! main-content anchor are fixed constants (see [`crate::selector`]).

use std::time::Duration;

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("rs-scrape-text/", env!("CARGO_PKG_VERSION"));

/// Configuration options for an [`Extractor`](crate::Extractor).
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_scrape_text::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(5)),
///     ..Options::default()
/// };
/// assert_eq!(options.diagnostic_snippet_chars, 200);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Total time allowed for one fetch, from connect to the last body byte.
    ///
    /// `None` leaves the request unbounded. A timeout surfaces as a
    /// network error.
    ///
    /// Default: `Some(30s)`
    pub timeout: Option<Duration>,

    /// Time allowed for establishing the TCP/TLS connection.
    ///
    /// Default: `Some(10s)`
    pub connect_timeout: Option<Duration>,

    /// User-Agent header value.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Number of characters of a non-2xx response body kept for diagnostics.
    ///
    /// Default: `200`
    pub diagnostic_snippet_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            diagnostic_snippet_chars: 200,
        }
    }
}
